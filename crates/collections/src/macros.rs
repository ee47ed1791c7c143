/// Builds an unlinked chain [`Entry`](crate::hashmap::Entry)
macro_rules! entry {
    ( $key: expr, $value: expr ) => {
        $crate::hashmap::Entry {
            key: $key.into(),
            value: $value.into(),
            next: None,
        }
    };
}

/// Same as `entry!`, but boxed, ready to be linked into a chain
macro_rules! boxentry {
    ( $key: expr, $value: expr ) => {
        Box::new($crate::macros::entry!($key, $value))
    };
}

pub(crate) use boxentry;
pub(crate) use entry;
