// Resume intake: validation of submitted form data, artifact naming, and the
// generate / download handlers that glue assembly to storage.

pub mod filename;
pub mod handlers;
pub mod validation;
