//! Deterministic fallback imagery for sites without a thumbnail
//!
//! When the secondary thumbnail lookup fails or comes back empty, the
//! result card still needs an image. The stand-in is a pure function of
//! the site name, so the same site always gets the same image.

/// Fixed rotation of stock imagery used as thumbnail stand-ins
pub const FALLBACK_IMAGES: [&str; 15] = [
    "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=600&h=400&fit=crop",
    "https://images.unsplash.com/photo-1564507592333-c60657eea523?w=600&h=400&fit=crop",
    "https://images.unsplash.com/photo-1519904981063-b0cf448d479e?w=600&h=400&fit=crop",
    "https://images.unsplash.com/photo-1550355291-bbee04a92027?w=600&h=400&fit=crop",
    "https://images.unsplash.com/photo-1589519160732-57fc498494f8?w=600&h=400&fit=crop",
    "https://images.unsplash.com/photo-1547471080-7cc2caa01a7e?w=600&h=400&fit=crop",
    "https://images.unsplash.com/photo-1486299267070-83823e5ca538?w=600&h=400&fit=crop",
    "https://images.unsplash.com/photo-1552520514-5fefe8c9ef14?w=600&h=400&fit=crop",
    "https://images.unsplash.com/photo-1577720643272-265f434884a3?w=600&h=400&fit=crop",
    "https://images.unsplash.com/photo-1587474260584-136574528ee0?w=600&h=400&fit=crop",
    "https://images.unsplash.com/photo-1591604129939-640da8ac8721?w=600&h=400&fit=crop",
    "https://images.unsplash.com/photo-1605662572650-fddf92d1b3a1?w=600&h=400&fit=crop",
    "https://images.unsplash.com/photo-1548013146-72f785b98ddb?w=600&h=400&fit=crop",
    "https://images.unsplash.com/photo-1578926314433-c6e50a2e8ba0?w=600&h=400&fit=crop",
    "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=600&h=400&fit=crop",
];

/// Deterministic stand-in image for a site name
pub fn fallback_image(name: &str) -> &'static str {
    let hash: u64 = name.chars().map(|c| c as u64).sum();
    FALLBACK_IMAGES[(hash % FALLBACK_IMAGES.len() as u64) as usize]
}
