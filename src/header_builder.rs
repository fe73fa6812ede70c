use crate::constants::{LIST_SEPARATOR, header};
use crate::context::RequestContext;
use crate::headers::HeaderCollection;
use crate::options::CorsOptions;
use crate::result::CorsError;

pub(crate) struct HeaderBuilder<'a> {
    options: &'a CorsOptions,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(options: &'a CorsOptions) -> Self {
        Self { options }
    }

    pub(crate) fn build_origin_header(
        &self,
        request: &RequestContext<'_>,
    ) -> Result<HeaderCollection, CorsError> {
        match self.options.origin.resolve(request)? {
            Some(value) => {
                let mut headers = HeaderCollection::with_estimate(1);
                headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, value);
                Ok(headers)
            }
            None => Ok(HeaderCollection::new()),
        }
    }

    pub(crate) fn build_methods_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        headers.push_list(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            &self.options.allow_methods,
            LIST_SEPARATOR,
        );
        headers
    }

    pub(crate) fn build_allowed_headers(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        headers.push_list(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            &self.options.allow_headers,
            LIST_SEPARATOR,
        );
        headers
    }

    pub(crate) fn build_exposed_headers(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        headers.push_list(
            header::ACCESS_CONTROL_EXPOSE_HEADERS,
            &self.options.expose_headers,
            LIST_SEPARATOR,
        );
        headers
    }

    pub(crate) fn build_max_age_header(&self) -> HeaderCollection {
        if let Some(value) = self.options.max_age_value() {
            let mut headers = HeaderCollection::with_estimate(1);
            headers.push(header::ACCESS_CONTROL_MAX_AGE, value);
            return headers;
        }
        HeaderCollection::new()
    }

    pub(crate) fn build_credentials_header(&self) -> HeaderCollection {
        if self.options.credentials {
            let mut headers = HeaderCollection::with_estimate(1);
            headers.push(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true".to_string());
            headers
        } else {
            HeaderCollection::new()
        }
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
