//! Prelude module - commonly used test utilities.
//!
//! Use `use signet_test::prelude::*;` to import all essential types.

pub use crate::{
    FailingSigner, FailingSignerFactory, FakeSigner, FakeSignerFactory, PanicOnceSigner,
    SequenceIds, fake_service, fake_service_with, setup_test_logging,
};
