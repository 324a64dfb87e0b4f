pub mod wl_surface;
pub mod xdg_popup;
pub mod zwlr_layer_surface_v1;
