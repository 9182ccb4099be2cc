//! Response Source Interface

use crate::error::TeacherRequestsResult;

/// Raw rows of the form-response sheet, header row included.
#[trait_variant::make(ResponseSource: Send)]
pub trait LocalResponseSource {
    async fn rows(&self) -> TeacherRequestsResult<Vec<Vec<String>>>;
}
