//! Small form primitives shared by every view.

mod button;
pub use button::{Button, ButtonVariant};

mod input;
pub use input::{FieldError, FormField, Input, Label, Select, TextArea};

mod confirm;
pub use confirm::ConfirmDialog;
