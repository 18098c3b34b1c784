pub mod interpreter;
pub mod parser;
pub mod types;

pub use interpreter::{
    Agel, EvalContext, EvalError, LoadError, OperatorRef, OperatorRegistry, RegistryError,
    compute_suggestions, same_operator,
};
pub use types::{Constants, ConstantsTable, Value};

/// Resolve every logic and value expression in `input` with a default
/// [`Agel`].
///
/// # Example
///
/// ```
/// use agel::constants;
///
/// let mut table = constants! { "C1" => "1" };
/// let result = agel::eval("#{$CONSTANTS.C1$ + 2 * 3}", &mut table).unwrap();
/// assert_eq!(result, "7");
/// ```
///
/// # Errors
///
/// Returns the first [`EvalError`] raised while evaluating.
pub fn eval(input: &str, constants: &mut dyn ConstantsTable) -> Result<String, EvalError> {
    Agel::new().eval(input, constants)
}

/// Creates a `HashMap<String, String>` constants table from name-value pairs.
///
/// # Example
///
/// ```
/// use agel::constants;
///
/// let table = constants! { "C1" => "1", "C3" => "abcd" };
/// assert_eq!(table.len(), 2);
/// assert_eq!(table["C3"], "abcd");
/// ```
#[macro_export]
macro_rules! constants {
    {} => {
        ::std::collections::HashMap::<String, String>::new()
    };
    { $($name:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = ::std::collections::HashMap::<String, String>::new();
            $(
                map.insert($name.to_string(), $value.to_string());
            )+
            map
        }
    };
}
