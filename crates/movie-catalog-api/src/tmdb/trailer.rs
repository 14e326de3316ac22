use movie_catalog_models::Video;

/// Pick the trailer to surface from a video listing.
///
/// With a language hint, only trailers matching the primary language subtag
/// qualify ("fr-FR" matches videos tagged "fr"). Without one, the first
/// YouTube trailer wins. Listings are consumed in catalog order.
pub fn pick_trailer<'a>(videos: &'a [Video], language: Option<&str>) -> Option<&'a Video> {
    let subtag = language.map(primary_subtag);
    videos.iter().find(|video| {
        video.is_youtube_trailer()
            && match subtag {
                Some(tag) => video.iso_639_1.as_deref() == Some(tag),
                None => true,
            }
    })
}

fn primary_subtag(tag: &str) -> &str {
    tag.split('-').next().unwrap_or(tag)
}
