//! Splitting an authority into `userinfo@host:port` pieces.

use std::fmt;

/// Borrowed view of an authority string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Authority<'a> {
    pub userinfo: Option<&'a str>,
    pub host: &'a str,
    pub port: Option<&'a str>,
}

impl<'a> Authority<'a> {
    pub fn split(authority: &'a str) -> Self {
        let (userinfo, hostport) = match authority.rsplit_once('@') {
            Some((userinfo, hostport)) => (Some(userinfo), hostport),
            None => (None, authority),
        };

        let (host, port) = if hostport.starts_with('[') {
            // IPv6 literal, the port can only follow the closing bracket
            match hostport.find(']') {
                Some(end) => match hostport[end + 1..].strip_prefix(':') {
                    Some(port) => (&hostport[..=end], Some(port)),
                    None => (hostport, None),
                },
                None => (hostport, None),
            }
        } else {
            match hostport.rsplit_once(':') {
                Some((host, port)) => (host, Some(port)),
                None => (hostport, None),
            }
        };

        Self { userinfo, host, port }
    }

    /// Same pieces around a different host.
    pub fn with_host<'b>(&self, host: &'b str) -> Authority<'b>
    where
        'a: 'b,
    {
        Authority { userinfo: self.userinfo, host, port: self.port }
    }
}

impl fmt::Display for Authority<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(userinfo) = self.userinfo {
            write!(f, "{userinfo}@")?;
        }
        f.write_str(self.host)?;
        if let Some(port) = self.port {
            write!(f, ":{port}")?;
        }
        Ok(())
    }
}
