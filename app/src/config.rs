//! Site identity and contact data, declared once and read everywhere.
//!
//! Both records are `static` items: they are constructed at program load,
//! never reassigned, and therefore safe to read from any number of threads
//! without synchronization.

use url::Url;

#[derive(Clone, Copy, Debug)]
pub struct SiteMetadata {
    /// Canonical site origin, an absolute URL.
    pub base_url: &'static str,
    pub title: &'static str,
    pub name: &'static str,
    /// Site-relative path to the social-preview image.
    pub og_image: &'static str,
    pub description: &'static str,
}

/// The fixed set of contact providers. Adding a provider is a type change,
/// not a data change.
#[derive(Clone, Copy, Debug)]
pub struct SocialLinks {
    pub github: &'static str,
    pub linkedin: &'static str,
    pub email: &'static str,
}

pub static META_DATA: SiteMetadata = SiteMetadata {
    base_url: "https://nextfolio-template.vercel.app/",
    title: "Charlie Lu",
    name: "Charlie Lu",
    og_image: "/opengraph-image.png",
    description: "A personal blog/portfolio. I write about stuff that are intersting to me.",
};

pub static SOCIAL_LINKS: SocialLinks = SocialLinks {
    github: "https://github.com/charlielu05",
    linkedin: "www.linkedin.com/in/charlie-d-lu",
    email: "mailto:charlielu05@gmail.com",
};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Could not parse base URL `{url}': {error}")]
    BaseUrl {
        url: &'static str,
        error: url::ParseError,
    },

    #[error("Social link `{provider}' is empty")]
    EmptySocialLink { provider: &'static str },
}

impl SiteMetadata {
    /// Joins `base_url` with a site-relative path, e.g. for Open Graph tags
    /// that must carry absolute URLs.
    pub fn absolute_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/'),
        )
    }

    fn validate(&self) -> Result<(), Error> {
        Url::parse(self.base_url).map_err(|error| Error::BaseUrl {
            url: self.base_url,
            error,
        })?;
        Ok(())
    }
}

impl SocialLinks {
    fn validate(&self) -> Result<(), Error> {
        let providers = [
            ("github", self.github),
            ("linkedin", self.linkedin),
            ("email", self.email),
        ];
        for (provider, value) in providers {
            if value.is_empty() {
                return Err(Error::EmptySocialLink { provider });
            }
        }
        Ok(())
    }
}

/// Shape check for the two statics above, run once by the server before it
/// binds. A malformed configuration is a non-recoverable startup error; no
/// other code path validates these values.
pub fn validate() -> Result<(), Error> {
    META_DATA.validate()?;
    SOCIAL_LINKS.validate()
}
