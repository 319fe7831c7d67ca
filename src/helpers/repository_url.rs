use crate::errors::{AnalyzerError, AnalyzerResult};
use crate::structs::repository_ref::RepositoryRef;

/// Takes owner and repo from the last two path segments of `url`.
///
/// Accepts `https://github.com/owner/repo`, `github.com/owner/repo/`,
/// `owner/repo` and a trailing `.git`.
pub fn parse_repository_url(url: &str) -> AnalyzerResult<RepositoryRef> {
    let trimmed = url.trim().trim_end_matches('/');
    let mut segments = trimmed.rsplit('/');

    let repo = segments.next().unwrap_or_default();
    let owner = segments
        .next()
        .ok_or_else(|| AnalyzerError::malformed_url(url, "expected <owner>/<repo> at the end of the URL"))?;

    let repo = repo.strip_suffix(".git").unwrap_or(repo);

    if owner.is_empty() || repo.is_empty() {
        return Err(AnalyzerError::malformed_url(url, "owner and repository must not be empty"));
    }

    if !owner.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(AnalyzerError::malformed_url(url, &format!("'{}' is not a valid owner", owner)));
    }

    if !repo.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')) {
        return Err(AnalyzerError::malformed_url(url, &format!("'{}' is not a valid repository name", repo)));
    }

    Ok(RepositoryRef {
        owner: owner.to_string(),
        repo: repo.to_string(),
    })
}
