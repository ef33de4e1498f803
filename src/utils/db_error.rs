/// True when the error is a unique violation on the `links.short_token`
/// index, i.e. a concurrent registration won the race for the token.
pub fn is_unique_violation_on_short_token(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some("links_short_token_key"))
}
