/// Account entity: identifier plus a balance that never goes negative.
/// State is modified using events, which are created by handling commands
pub mod account;

/// Commands that later are executed by [`account`].
pub mod command;

/// Transaction processor interface, implemented by [`account::Account`].
///
/// NOTE: the interface is a seam for the replay service, so it can be
/// driven by something other than a single in-memory account.
pub mod processor;

/// Replays a CSV stream of operations against a processor. Lives in the
/// library so integration tests can use it.
pub mod bin_utils;
