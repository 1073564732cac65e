use async_trait::async_trait;

use crate::models::DeliveryResult;

pub mod email;

pub use email::{EmailNotifier, SmtpChannel};

/// Delivers a rendered report through some channel.
///
/// Implementations never fail outright: an unconfigured channel or a
/// rejected message is reported through the returned [`DeliveryResult`],
/// which always carries the document so it can be surfaced elsewhere.
#[async_trait]
pub trait Notifier: Send + Sync {
    fn name(&self) -> &str;

    async fn deliver(&self, subject: &str, body: &str) -> DeliveryResult;
}
