// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Turning a stored view definition back into a usable query.
//!
//! Parsing and analysis belong to the query layer; the catalog only needs to
//! know whether a definition still resolves when a view is loaded.

/// The outcome of resolving a view definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedQuery {
	pub statement: String,
	/// Output column names when the resolver knows them.
	pub columns: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct ResolveError(pub String);

pub trait QueryResolver: Send + Sync {
	fn resolve(&self, definition: &str, sql_mode: i64) -> Result<ResolvedQuery, ResolveError>;
}

impl<F> QueryResolver for F
where
	F: Fn(&str, i64) -> Result<ResolvedQuery, ResolveError> + Send + Sync,
{
	fn resolve(&self, definition: &str, sql_mode: i64) -> Result<ResolvedQuery, ResolveError> {
		self(definition, sql_mode)
	}
}

/// Accepts any `SELECT` or `WITH` statement whose parentheses balance and
/// whose quoted sections and comments are closed. It does not look at
/// referenced objects.
#[derive(Debug, Default, Clone, Copy)]
pub struct SyntacticResolver;

impl QueryResolver for SyntacticResolver {
	fn resolve(&self, definition: &str, _sql_mode: i64) -> Result<ResolvedQuery, ResolveError> {
		let statement = definition.trim().trim_end_matches(';').trim_end();
		if statement.is_empty() {
			return Err(ResolveError("view definition is empty".to_string()));
		}

		let keyword = leading_keyword(statement)?;
		if keyword != "SELECT" && keyword != "WITH" {
			return Err(ResolveError(format!(
				"view definition must be a SELECT or WITH query, found `{keyword}`"
			)));
		}

		check_balanced(statement)?;

		Ok(ResolvedQuery {
			statement: statement.to_string(),
			columns: vec![],
		})
	}
}

/// The first word of the statement after whitespace, comments and opening
/// parentheses, upper-cased.
fn leading_keyword(statement: &str) -> Result<String, ResolveError> {
	let mut rest = statement;
	loop {
		rest = rest.trim_start();
		if let Some(comment) = rest.strip_prefix("/*") {
			let Some(end) = comment.find("*/") else {
				return Err(unterminated_comment());
			};
			rest = &comment[end + 2..];
		} else if let Some(comment) = rest.strip_prefix("--") {
			rest = comment.find('\n').map_or("", |end| &comment[end + 1..]);
		} else if let Some(inner) = rest.strip_prefix('(') {
			rest = inner;
		} else {
			break;
		}
	}

	let keyword: String = rest.chars().take_while(|c| c.is_ascii_alphabetic()).collect();
	Ok(keyword.to_ascii_uppercase())
}

fn check_balanced(statement: &str) -> Result<(), ResolveError> {
	let mut depth = 0usize;
	let mut chars = statement.chars().peekable();
	while let Some(c) = chars.next() {
		match c {
			'\'' | '"' | '`' => {
				// backslash escapes apply to string literals only, never to identifiers
				let escapes = c != '`';
				let mut closed = false;
				while let Some(next) = chars.next() {
					if escapes && next == '\\' {
						chars.next();
					} else if next == c {
						closed = true;
						break;
					}
				}
				if !closed {
					return Err(ResolveError(format!("unterminated {c} quoted section in view definition")));
				}
			}
			'-' if chars.peek() == Some(&'-') => {
				for next in chars.by_ref() {
					if next == '\n' {
						break;
					}
				}
			}
			'/' if chars.peek() == Some(&'*') => {
				chars.next();
				let mut previous = '\0';
				let mut closed = false;
				for next in chars.by_ref() {
					if previous == '*' && next == '/' {
						closed = true;
						break;
					}
					previous = next;
				}
				if !closed {
					return Err(unterminated_comment());
				}
			}
			'(' => depth += 1,
			')' => {
				if depth == 0 {
					return Err(ResolveError("unbalanced `)` in view definition".to_string()));
				}
				depth -= 1;
			}
			_ => {}
		}
	}

	if depth > 0 {
		return Err(ResolveError("unbalanced `(` in view definition".to_string()));
	}
	Ok(())
}

fn unterminated_comment() -> ResolveError {
	ResolveError("unterminated comment in view definition".to_string())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_accepts_select_and_with() {
		let resolved = SyntacticResolver.resolve("select a, (b + 1) from t;", 0).unwrap();
		assert_eq!(resolved.statement, "select a, (b + 1) from t");
		assert!(SyntacticResolver.resolve("WITH x AS (SELECT 1) SELECT * FROM x", 0).is_ok());
	}

	#[test]
	fn test_ignores_parentheses_in_literals() {
		assert!(SyntacticResolver.resolve("SELECT ')' AS p, `we(ird` FROM t", 0).is_ok());
		assert!(SyntacticResolver.resolve("SELECT 'it\\'s' FROM t", 0).is_ok());
	}

	#[test]
	fn test_rejects_empty() {
		let err = SyntacticResolver.resolve("  ; ", 0).unwrap_err();
		assert_eq!(err.0, "view definition is empty");
	}

	#[test]
	fn test_rejects_non_query() {
		let err = SyntacticResolver.resolve("DROP TABLE t", 0).unwrap_err();
		assert_eq!(err.0, "view definition must be a SELECT or WITH query, found `DROP`");
	}

	#[test]
	fn test_rejects_unbalanced() {
		assert!(SyntacticResolver.resolve("SELECT (a FROM t", 0).is_err());
		assert!(SyntacticResolver.resolve("SELECT a) FROM t", 0).is_err());
		assert!(SyntacticResolver.resolve("SELECT 'a FROM t", 0).is_err());
	}

	#[test]
	fn test_leading_parentheses_and_comments() {
		for definition in [
			"(SELECT 1) UNION (SELECT 2)",
			"/* c */ SELECT 1",
			"-- note\nSELECT 1",
			"  /* a */ -- b\n ( (WITH x AS (SELECT 1) SELECT * FROM x))",
		] {
			assert!(SyntacticResolver.resolve(definition, 0).is_ok(), "{definition}");
		}
	}

	#[test]
	fn test_comments_hide_parentheses() {
		assert!(SyntacticResolver.resolve("SELECT a /* ( */ FROM t", 0).is_ok());
		assert!(SyntacticResolver.resolve("SELECT a -- )\nFROM t", 0).is_ok());
	}

	#[test]
	fn test_unterminated_comment() {
		let err = SyntacticResolver.resolve("/* open SELECT 1", 0).unwrap_err();
		assert_eq!(err.0, "unterminated comment in view definition");
		assert!(SyntacticResolver.resolve("SELECT 1 /* open", 0).is_err());
	}

	#[test]
	fn test_backslash_is_literal_in_identifiers() {
		assert!(SyntacticResolver.resolve("SELECT `a\\` FROM t", 0).is_ok());
		assert!(SyntacticResolver.resolve("SELECT \"x\\\"y\" FROM t", 0).is_ok());
	}

	#[test]
	fn test_rejects_non_query_after_comment() {
		let err = SyntacticResolver.resolve("/* c */ DELETE FROM t", 0).unwrap_err();
		assert_eq!(err.0, "view definition must be a SELECT or WITH query, found `DELETE`");
	}

	#[test]
	fn test_closure_resolver() {
		let resolver = |definition: &str, _: i64| -> Result<ResolvedQuery, ResolveError> {
			Ok(ResolvedQuery {
				statement: definition.to_uppercase(),
				columns: vec!["c".to_string()],
			})
		};
		let resolved = QueryResolver::resolve(&resolver, "select c from t", 0).unwrap();
		assert_eq!(resolved.statement, "SELECT C FROM T");
	}
}
