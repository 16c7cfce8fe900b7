//! Integration tests for the wirebox workspace; everything lives in `tests/`.
