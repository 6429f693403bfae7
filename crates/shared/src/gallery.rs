use rand::{seq::IndexedRandom, Rng};

use crate::domain::{Category, GalleryFilter, GalleryItem};

pub const GALLERY: &[GalleryItem] = &[
    GalleryItem {
        id: 1,
        image: "assets/gallary/gallery1.jpg",
        title: "Marley Twists",
        description: "Medium to large rope-like twists using Marley-textured hair for a natural, voluminous look. This protective style offers a soft matte finish and is ideal for maintaining natural hair health.",
        category: Category::BoxBraids,
        tags: &["Protective", "Voluminous", "Natural Texture"],
    },
    GalleryItem {
        id: 2,
        image: "assets/gallary/gallery2.jpg",
        title: "Goddess Box Braids",
        description: "Box braids with loose, curly ends for a soft and flowing finish. Combines structure with movement, offering a lightweight, versatile look suitable for long wear.",
        category: Category::BoxBraids,
        tags: &["Curly Ends", "Knotless Option", "Protective"],
    },
    GalleryItem {
        id: 3,
        image: "assets/gallary/gallery3.jpg",
        title: "Knotless Box Braids",
        description: "A modern variation of classic box braids featuring smooth, knot-free roots created with the feed-in method. Each section is precisely parted into clean squares for a sleek, geometric look. Lightweight and gentle on the scalp, this protective style offers natural movement and long-lasting wear.",
        category: Category::BoxBraids,
        tags: &["Knotless", "Square Parts", "Lightweight"],
    },
    GalleryItem {
        id: 4,
        image: "assets/gallary/gallery4.jpg",
        title: "Box-Parted Starter Locs",
        description: "Hair is parted into neat square sections and twisted from root to tip to begin the loc formation process. This foundation style promotes even loc development and clean parting, ideal for starting a loc journey.",
        category: Category::BoxBraids,
        tags: &["Starter Locs", "Square Parts", "Loc Journey"],
    },
    GalleryItem {
        id: 5,
        image: "assets/gallary/gallery5.jpg",
        title: "Knotless Box Braids",
        description: "Individual braids started with natural hair and extended using a feed-in technique to avoid knots. The clean square parting offers a lightweight, tension-free finish.",
        category: Category::BoxBraids,
        tags: &["Lightweight", "Square Parts", "Protective"],
    },
    GalleryItem {
        id: 6,
        image: "assets/gallary/gallery6.jpg",
        title: "Beaded Cornrows",
        description: "Cornrows braided close to the scalp and adorned with wooden beads for a classic, expressive style. Ideal for cultural expression and gentle protection.",
        category: Category::Cornrows,
        tags: &["Traditional", "Decorative", "Protective"],
    },
    GalleryItem {
        id: 7,
        image: "assets/gallary/gallery7.jpg",
        title: "Medium Marley Twists",
        description: "Two-strand twists with Marley-textured extensions for a full-bodied, natural look. The twists are durable and flexible for daily wear while maintaining scalp comfort.",
        category: Category::Twists,
        tags: &["Twists", "Textured", "Protective"],
    },
    GalleryItem {
        id: 8,
        image: "assets/gallary/gallery8.jpg",
        title: "Cornrows into Puff",
        description: "Cornrows styled toward the crown, ending in a voluminous natural puff. This hybrid look blends defined braids with the beauty of free-textured hair.",
        category: Category::Cornrows,
        tags: &["Updo", "Natural Hair", "Protective"],
    },
    GalleryItem {
        id: 9,
        image: "assets/gallary/gallery9.jpg",
        title: "Marley Twists",
        description: "Chunky two-strand twists using Marley hair, providing a natural, springy texture. A durable and low-maintenance protective style that retains moisture and definition.",
        category: Category::Twists,
        tags: &["Natural Texture", "Protective", "Full Volume"],
    },
    GalleryItem {
        id: 10,
        image: "assets/gallary/gallery10.jpg",
        title: "Feed-In Ponytail Braids",
        description: "Cornrows braided upward into a high ponytail, finished with long curly extensions. Elegant and versatile, this protective style enhances length and volume.",
        category: Category::Cornrows,
        tags: &["Ponytail", "Feed-In", "Glamorous"],
    },
];

pub fn item_by_id(id: u32) -> Option<&'static GalleryItem> {
    GALLERY.iter().find(|item| item.id == id)
}

pub fn filtered(filter: GalleryFilter) -> Vec<&'static GalleryItem> {
    GALLERY.iter().filter(|item| filter.matches(item)).collect()
}

pub fn total_images() -> usize {
    GALLERY.len()
}

/// Categories in the order they first appear in the gallery.
pub fn categories() -> Vec<Category> {
    let mut seen = Vec::new();
    for item in GALLERY {
        if !seen.contains(&item.category) {
            seen.push(item.category);
        }
    }
    seen
}

pub fn category_count(category: Category) -> usize {
    GALLERY
        .iter()
        .filter(|item| item.category == category)
        .count()
}

/// Display name for a filter key, falling back to the key itself.
pub fn category_display_name(key: &str) -> &str {
    match GalleryFilter::from_key(key) {
        Some(filter) => filter.display_name(),
        None => key,
    }
}

pub fn random_item<R: Rng + ?Sized>(rng: &mut R) -> Option<&'static GalleryItem> {
    GALLERY.choose(rng)
}

pub fn all_tags() -> Vec<&'static str> {
    let mut tags: Vec<&'static str> = Vec::new();
    for tag in GALLERY.iter().flat_map(|item| item.tags.iter().copied()) {
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}

pub fn search_by_title(term: &str) -> Vec<&'static GalleryItem> {
    let needle = term.to_lowercase();
    GALLERY
        .iter()
        .filter(|item| item.title.to_lowercase().contains(&needle))
        .collect()
}

pub fn styles_by_category() -> Vec<(Category, Vec<&'static GalleryItem>)> {
    categories()
        .into_iter()
        .map(|category| (category, filtered(GalleryFilter::Only(category))))
        .collect()
}

pub fn protective_styles() -> Vec<&'static GalleryItem> {
    GALLERY
        .iter()
        .filter(|item| {
            item.tags
                .iter()
                .any(|tag| tag.to_lowercase().contains("protective"))
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/gallery_tests.rs"]
mod tests;
