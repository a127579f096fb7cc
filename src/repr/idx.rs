safe_index::new! {
    /// Roster member index.
    Member,
    /// Maps a [`Member`] to something.
    map: MemberMap,
}

safe_index::new! {
    /// Site index.
    Site,
    /// Maps a [`Site`] to something.
    map: SiteMap,
}
