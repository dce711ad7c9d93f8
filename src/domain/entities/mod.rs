pub mod drain_report;
pub mod need;
pub mod need_stats;
pub mod pending_verification;
pub mod sync_batch;
pub mod verify_outcome;

pub use drain_report::DrainReport;
pub use need::{Need, NeedPatch};
pub use need_stats::{NeedStats, NeedsOverview, TypeBreakdown, UrgencyBreakdown};
pub use pending_verification::{PendingVerification, PendingVerificationDraft};
pub use sync_batch::{SubmissionResult, SyncBatchOutcome, VerificationSubmission};
pub use verify_outcome::VerifyOutcome;
