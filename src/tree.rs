pub use {popup::*, toplevel::*};

mod popup;
mod toplevel;
