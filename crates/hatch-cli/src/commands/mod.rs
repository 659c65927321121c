//! Command handlers. Each one translates arguments into a core call and
//! renders the result; no business logic lives here.

pub mod create;
