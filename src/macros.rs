macro_rules! efrom {
    ($ename:ty, $vname:ident, $sname:ty) => {
        impl From<$sname> for $ename {
            fn from(e: $sname) -> Self {
                Self::$vname(Box::new(e))
            }
        }
    };
}

/// Logs the message and panics. Release builds abort on panic.
macro_rules! fatal {
    ($($arg:tt)+) => {{
        log::error!($($arg)+);
        panic!($($arg)+)
    }};
}

macro_rules! linear_ids {
    ($ids:ident, $id:ident) => {
        pub struct $ids {
            next: std::cell::Cell<u32>,
        }

        impl Default for $ids {
            fn default() -> Self {
                Self {
                    next: std::cell::Cell::new(1),
                }
            }
        }

        impl $ids {
            pub fn next(&self) -> $id {
                let id = self.next.get();
                self.next.set(id + 1);
                $id(id)
            }
        }

        #[derive(Debug, Copy, Clone, Hash, Ord, PartialOrd, Eq, PartialEq)]
        pub struct $id(u32);

        impl std::fmt::Display for $id {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.0, f)
            }
        }
    };
}
