//! Shared fixtures for the integration tests.

/// Three-release changelog exercising the common heading and section shapes.
pub const SAMPLE_CHANGELOG: &str = r"# Changelog

## [2.1.0] - 2024-03-15
### Features
- Dark mode support
- [new] Keyboard shortcuts
### Fixed
- Crash when the changelog is empty

## [2.0.0] - 2024-01-10
### Breaking Changes
- Removed the legacy v1 API
### Security
- Patched dependency vulnerability

## [1.9.3] - 2023-11-02
### Fixed
- Off-by-one in pagination
";
