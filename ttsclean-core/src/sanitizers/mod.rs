//! Rule compilation for the markdown stage.
//!
//! `compiler` turns an ordered `RuleConfig` into regexes with the flags each
//! rule asks for, and caches the result per configuration.

pub mod compiler;
