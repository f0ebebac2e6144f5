pub mod models;

pub use models::{
    Contact, Education, Identity, Profile, Project, Publication, SocialLink, SAMPLE_PROFILE,
};
