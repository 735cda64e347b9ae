use super::*;

fn url(id: i64, active: bool, clicks: u64) -> ShortUrl {
    ShortUrl { id, active, click_count: clicks, ..ShortUrl::default() }
}

#[test]
fn totals_count_active_and_sum_clicks() {
    let totals = UrlTotals::of(&[url(1, true, 5), url(2, false, 7), url(3, true, 0)]);
    assert_eq!(totals, UrlTotals { urls: 3, active: 2, clicks: 12 });
}

#[test]
fn totals_of_empty_page_are_zero() {
    assert_eq!(UrlTotals::of(&[]), UrlTotals::default());
}
