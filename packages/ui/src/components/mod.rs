//! Small styled building blocks shared by every view.

mod button;
pub use button::{Button, ButtonVariant};

mod input;
pub use input::{FieldError, Input, Label, Select};

mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod spinner;
pub use spinner::Spinner;
