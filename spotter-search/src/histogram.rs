use spotter_core::FlightOffer;

/// Fixed number of equal-width price buckets.
pub const BUCKET_COUNT: usize = 20;

#[derive(Debug, Clone, PartialEq)]
pub struct PriceBucket {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

/// Partition the unfiltered result set's price range into `BUCKET_COUNT`
/// equal-width buckets. Each price lands in `floor((price - min) / width)`,
/// clamped to the last bucket for the maximum value. Empty buckets are
/// retained so the distribution reads continuously. A zero-width range
/// falls back to a bucket width of 100. Offers with unparsable totals are
/// left out of the counts but never collapse the bucket grid: any
/// non-empty offer list produces `BUCKET_COUNT` buckets.
pub fn price_histogram(offers: &[FlightOffer]) -> Vec<PriceBucket> {
    if offers.is_empty() {
        return Vec::new();
    }
    let prices: Vec<f64> = offers.iter().filter_map(FlightOffer::price_total).collect();

    let (min, max) = if prices.is_empty() {
        (0.0, 0.0)
    } else {
        (
            prices.iter().copied().fold(f64::INFINITY, f64::min).floor(),
            prices.iter().copied().fold(f64::NEG_INFINITY, f64::max).ceil(),
        )
    };
    let range = max - min;
    let width = if range > 0.0 {
        range / BUCKET_COUNT as f64
    } else {
        100.0
    };

    let mut buckets: Vec<PriceBucket> = (0..BUCKET_COUNT)
        .map(|i| {
            let start = min + i as f64 * width;
            PriceBucket {
                start,
                end: start + width,
                count: 0,
            }
        })
        .collect();

    for price in prices {
        let index = (((price - min) / width).floor() as usize).min(BUCKET_COUNT - 1);
        buckets[index].count += 1;
    }

    buckets
}
