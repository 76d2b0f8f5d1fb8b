//! Backend endpoints used by the dashboard

/// The four read endpoints of the sentiment backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `GET /atendentes?page=&limit=`
    Attendants,
    /// `GET /clientes?page=&limit=`
    Clients,
    /// `GET /performance-geral`
    Performance,
    /// `GET /evolucao-mensal`
    MonthlyEvolution,
}

impl Endpoint {
    /// Path segment relative to the backend base URL
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Attendants => "atendentes",
            Endpoint::Clients => "clientes",
            Endpoint::Performance => "performance-geral",
            Endpoint::MonthlyEvolution => "evolucao-mensal",
        }
    }

    /// Relative endpoint for one page of a ranked collection
    pub fn page(&self, page: u64, limit: u64) -> String {
        format!("{}?page={}&limit={}", self.path(), page, limit)
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Join a base URL and a relative endpoint with exactly one `/`
pub fn join_url(base_url: &str, endpoint: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    )
}
