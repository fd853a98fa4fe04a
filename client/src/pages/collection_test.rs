use super::*;

#[test]
fn pending_id_waits_instead_of_redirecting() {
    assert_eq!(collection_outcome(&LiveParam::Pending), CollectionOutcome::Waiting);
}

#[test]
fn every_prerendered_id_redirects() {
    for id in crate::routing::table::COLLECTION_IDS {
        assert_eq!(collection_outcome(&LiveParam::Known(id.to_owned())), CollectionOutcome::Redirect);
    }
}

#[test]
fn ids_outside_the_closed_set_are_not_found() {
    assert_eq!(collection_outcome(&LiveParam::Known("6".to_owned())), CollectionOutcome::NotFound);
    assert_eq!(collection_outcome(&LiveParam::Missing), CollectionOutcome::NotFound);
}
