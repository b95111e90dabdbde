use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UsageExamples {
    pub json: &'static str,
    pub wire: &'static str,
    pub gaming: &'static str,
    pub geo: &'static str,
    pub simple: &'static str,
}

impl Default for UsageExamples {
    fn default() -> Self {
        Self {
            json: "/dns-query?name=google.com&type=A",
            wire: "/dns-query?dns=AAABAAABAAAAAAAABmdvb2dsZQNjb20AAAEAAQ",
            gaming: "/dns-query?name=steampowered.com&gaming=true",
            geo: "/dns-query?name=twitter.com&geo=abroad",
            simple: "/dns-query?name=github.com&format=simple",
        }
    }
}

/// Body of the 400 answered when neither `name` nor `dns` was given.
#[derive(Debug, Serialize)]
pub struct UsageResponse {
    pub error: &'static str,
    pub examples: UsageExamples,
}

impl Default for UsageResponse {
    fn default() -> Self {
        Self {
            error: "Missing required parameter: name (or dns for wire format)",
            examples: UsageExamples::default(),
        }
    }
}
