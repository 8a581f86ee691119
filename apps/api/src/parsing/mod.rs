// Resume parsing: text extraction, section segmentation, skills and contact details.
// Everything here is lexical; nothing calls the embedding provider.

pub mod contact;
pub mod extract;
pub mod handlers;
pub mod keywords;
pub mod resume;
pub mod sections;
pub mod skills;
