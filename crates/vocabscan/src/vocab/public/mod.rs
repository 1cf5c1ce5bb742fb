//! # Public Vocabulary Conventions

pub mod bert;

/// Declare a family of ``[NAME]`` bracketed reserved tokens.
///
/// Each entry becomes a `&str` constant, and `$list` collects them all.
#[macro_export]
macro_rules! declare_bracket_special {
    ($list:ident; $(($name:ident, $body:literal)),* $(,)?) => {
        $(
            #[doc = concat!("The `[", $body, "]` reserved token.")]
            pub const $name: &str = concat!("[", $body, "]");
        )*

        /// All reserved tokens declared alongside this list.
        pub const $list: &[&str] = &[$($name),*];
    };
}
