pub mod local_queue_id;
pub mod need_id;
pub mod need_status;
pub mod need_type;
pub mod urgency;
pub mod verification_state;
pub mod volunteer_id;

pub use local_queue_id::LocalQueueId;
pub use need_id::NeedId;
pub use need_status::NeedStatus;
pub use need_type::NeedType;
pub use urgency::Urgency;
pub use verification_state::VerificationState;
pub use volunteer_id::VolunteerId;
