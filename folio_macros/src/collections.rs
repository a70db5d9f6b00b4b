//! Collection macros.

/// A macro that creates a new `BTreeMap` instance with the given key-value pairs.
///
/// # Examples
///
/// Create a map of key-value pairs.
///
/// ```
/// use folio_macros::btree_map;
///
/// let map = btree_map! {
///     "first" => 1,
///     "second" => 2,
/// };
/// assert_eq!(map.get("first"), Some(&1));
/// assert_eq!(map.get("second"), Some(&2));
/// ```
#[macro_export(local_inner_macros)]
macro_rules! btree_map {
    () => {
        ::std::collections::BTreeMap::new()
    };
    ($($key:expr => $value:expr),* $(,)?) => {{
        let mut _map = btree_map!();
        $(
            _map.insert($key, $value);
        )*
        _map
    }};
}

/// A macro that creates a new `BTreeMap` instance with the given key-value pairs.
/// The same as `btree_map!`, but converts keys and values to the target type.
///
/// # Examples
///
/// Create a map with `String` keys from string literals.
///
/// ```
/// # use std::collections::BTreeMap;
/// use folio_macros::btree_map_into;
///
/// let map: BTreeMap<String, Vec<i32>> = btree_map_into! {
///     "first" => vec![1],
///     "second" => vec![2, 3],
/// };
/// assert_eq!(map.get("first"), Some(&vec![1]));
/// assert_eq!(map.get("second"), Some(&vec![2, 3]));
/// ```
#[macro_export(local_inner_macros)]
macro_rules! btree_map_into {
    ($($key:expr => $value:expr),* $(,)?) => {
        btree_map!($($key.into() => $value.into()),*)
    };
}
