//! Workspace-level integration test aggregate; see `tests/`.
