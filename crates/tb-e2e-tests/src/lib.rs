//! End-to-end tests for the Turbina chat bot.
//!
//! Everything lives under `tests/`; this library target is intentionally empty.
