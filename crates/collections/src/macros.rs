/// Builds a [`ProbingHashSet`](crate::ProbingHashSet) and inserts the given keys,
/// skipping duplicates
///
/// Evaluates to `Result<ProbingHashSet, ProbeSetError>`, any insert error
/// other than a duplicate key is returned. Without a capacity the set
/// starts from [`ProbingHashSet::default`](crate::ProbingHashSet::default).
#[macro_export]
macro_rules! probeset {
    ( @fill $set: ident; $( $key: expr ),* ) => {
        (|| {
            let mut $set = $set;
            $(
                match $set.insert($key) {
                    Ok(_) | Err($crate::ProbeSetError::DuplicateKey { .. }) => {}
                    Err(e) => return Err(e),
                }
            )*
            Ok::<_, $crate::ProbeSetError>($set)
        })()
    };
    ( $cap: expr; $( $key: expr ),* $(,)? ) => {
        $crate::ProbingHashSet::new($cap).and_then(|set| $crate::probeset!(@fill set; $( $key ),*))
    };
    ( $( $key: expr ),* $(,)? ) => {{
        let set = $crate::ProbingHashSet::default();
        $crate::probeset!(@fill set; $( $key ),*)
    }};
}
