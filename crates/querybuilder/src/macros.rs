/// Collects `(name, value)` pairs into a `Vec<(String, Value)>`, converting
/// each side with `Into`.
///
/// ```
/// use querybuilder::{criteria, Value};
///
/// let pairs = criteria![("name", "test"), ("nb_partitions", 6)];
/// assert_eq!(pairs[1], ("nb_partitions".to_string(), Value::Int(6)));
/// ```
#[macro_export]
macro_rules! criteria {
    () => {
        ::std::vec::Vec::<(::std::string::String, $crate::Value)>::new()
    };
    ($(($name:expr, $value:expr)),+ $(,)?) => {
        ::std::vec![$((
            ::std::string::String::from($name),
            $crate::Value::from($value),
        )),+]
    };
}
