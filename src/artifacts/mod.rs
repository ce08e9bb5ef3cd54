// Fitted artifact exports
pub mod encoder;
pub mod model;
pub mod scaler;
pub mod store;

pub use encoder::{EncodeError, EncoderColumn, OneHotEncoder, UnknownPolicy};
pub use model::LinearModel;
pub use scaler::{ScaleError, ScalerColumn, StandardScaler};
pub use store::{ArtifactError, ArtifactStore};
