/// Flag lookup over the arguments the host received at startup
///
/// Implementations answer "value of the named flag, or absent". How flags are
/// spelled on the real command line is the host's concern.
pub trait ArgumentList {
    /// Value of the flag `name`, if it was supplied
    fn flag_value(&self, name: &str) -> Option<&str>;
}

/// Ordered `(flag, value)` pairs. Names match case-insensitively and the
/// first occurrence wins.
impl<K, V> ArgumentList for [(K, V)]
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    fn flag_value(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(flag, _)| flag.as_ref().eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_ref())
    }
}

impl<K, V> ArgumentList for Vec<(K, V)>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    fn flag_value(&self, name: &str) -> Option<&str> {
        self.as_slice().flag_value(name)
    }
}

/// Raw launch parameters, before defaults are applied
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchParameters {
    pub url: Option<String>,
    pub title: Option<String>,
}

impl LaunchParameters {
    pub const URL_FLAG: &'static str = "url";
    pub const TITLE_FLAG: &'static str = "title";

    /// Extract the `url` and `title` flags from an argument list
    pub fn extract<A: ArgumentList + ?Sized>(args: &A) -> Self {
        let params = Self {
            url: args.flag_value(Self::URL_FLAG).map(str::to_string),
            title: args.flag_value(Self::TITLE_FLAG).map(str::to_string),
        };

        tracing::debug!(
            "Launch parameters: url={:?}, title={:?}",
            params.url,
            params.title
        );

        params
    }
}
