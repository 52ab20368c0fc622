//! Send/Sync guarantees for core types.

use caller_trail::{
    ConfigError, HostStack, HostStacks, PanicOnFailure, TestContext, TrailConfig,
    TrailConfigBuilder,
};
use rstest::rstest;
use static_assertions::assert_impl_all;

#[rstest]
fn configuration_is_send_sync() {
    assert_impl_all!(TrailConfig: Send, Sync);
    assert_impl_all!(TrailConfigBuilder: Send, Sync);
    assert_impl_all!(ConfigError: Send, Sync, std::error::Error);
}

#[rstest]
fn host_capture_is_send_sync() {
    assert_impl_all!(HostStacks: Send, Sync);
    assert_impl_all!(HostStack: Send, Sync);
    assert_impl_all!(PanicOnFailure: Send, Sync);
    assert_impl_all!(TestContext: Send, Sync);
}
