//! Macros for creating validators with minimal boilerplate.
//!
//! # Examples
//!
//! ```
//! use reportingcloud_validator::foundation::{Validate, Value};
//! use reportingcloud_validator::validator;
//!
//! validator! {
//!     /// Accepts non-empty strings.
//!     pub NotBlank;
//!     templates { InvalidLength => "'%value%' must not be blank" }
//!     rule(value) { value.as_str().is_some_and(|s| !s.trim().is_empty()) }
//!     error InvalidLength;
//!     fn not_blank();
//! }
//!
//! assert!(not_blank().validate(&Value::from("x")).is_ok());
//! assert!(NotBlank.validate(&Value::from("  ")).is_err());
//! ```

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Creates a unit validator: struct definition, `Validate` implementation
/// with its template table, and optionally a factory function.
///
/// `#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]` is always
/// applied. The rule block sees the candidate as `&Value`; when it evaluates
/// to `false` the validator reports the code named after `error`.
#[macro_export]
macro_rules! validator {
    // ── Unit validator + factory fn ───────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        templates { $($code:ident => $pattern:literal),+ $(,)? }
        rule($inp:ident) $rule:block
        error $err:ident;
        fn $factory:ident();
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name;
            templates { $($code => $pattern),+ }
            rule($inp) $rule
            error $err;
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Unit validator, no factory ────────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        templates { $($code:ident => $pattern:literal),+ $(,)? }
        rule($inp:ident) $rule:block
        error $err:ident;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            const NAME: &'static str = stringify!($name);
            const TEMPLATES: $crate::foundation::MessageTemplates = &[
                $(($crate::foundation::ErrorCode::$code, $pattern)),+
            ];

            fn check(
                &self,
                $inp: &$crate::foundation::Value,
            ) -> ::std::result::Result<(), $crate::foundation::Violation> {
                if $rule {
                    Ok(())
                } else {
                    Err($crate::foundation::Violation::new(
                        $crate::foundation::ErrorCode::$err,
                    ))
                }
            }
        }
    };
}
