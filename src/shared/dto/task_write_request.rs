use serde::Deserialize;

/// Body of POST /tasks and PUT /tasks/{taskId}. Fields arrive as raw
/// optional strings so that absence and unknown status literals surface as
/// validation details instead of body-rejection errors. A client-supplied
/// taskId is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct TaskWriteRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
}
