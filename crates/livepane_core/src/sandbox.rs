//! Capability set granted to the preview browsing context.

/// Sandbox tokens applied to the preview iframe and the standalone preview
/// response.
///
/// Scripts may run and the document keeps its origin for DOM access; forms,
/// popups, modals and top-level navigation stay disabled because their tokens
/// are never granted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SandboxPolicy {
    pub allow_scripts: bool,
    pub allow_same_origin: bool,
}

impl Default for SandboxPolicy {
    fn default() -> Self {
        Self {
            allow_scripts: true,
            allow_same_origin: true,
        }
    }
}

impl SandboxPolicy {
    /// Space-separated tokens for an iframe `sandbox` attribute.
    pub fn iframe_tokens(&self) -> String {
        let mut tokens = Vec::with_capacity(2);
        if self.allow_scripts {
            tokens.push("allow-scripts");
        }
        if self.allow_same_origin {
            tokens.push("allow-same-origin");
        }
        tokens.join(" ")
    }

    /// `Content-Security-Policy` value for serving the preview document
    /// directly.
    pub fn content_security_policy(&self) -> String {
        let tokens = self.iframe_tokens();
        if tokens.is_empty() {
            "sandbox; frame-ancestors 'self'".to_string()
        } else {
            format!("sandbox {}; frame-ancestors 'self'", tokens)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SandboxPolicy;

    #[test]
    fn default_policy_allows_scripts_and_same_origin_only() {
        let policy = SandboxPolicy::default();
        assert_eq!(policy.iframe_tokens(), "allow-scripts allow-same-origin");
        let csp = policy.content_security_policy();
        assert!(csp.starts_with("sandbox allow-scripts allow-same-origin;"));
        for forbidden in ["allow-top-navigation", "allow-popups", "allow-forms"] {
            assert!(!csp.contains(forbidden), "{}", forbidden);
        }
    }

    #[test]
    fn empty_policy_is_fully_sandboxed() {
        let policy = SandboxPolicy {
            allow_scripts: false,
            allow_same_origin: false,
        };
        assert_eq!(policy.iframe_tokens(), "");
        assert_eq!(
            policy.content_security_policy(),
            "sandbox; frame-ancestors 'self'"
        );
    }
}
