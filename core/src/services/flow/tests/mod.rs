//! Tests for the sign-in flow controller


#[cfg(test)]
mod gate_tests;
