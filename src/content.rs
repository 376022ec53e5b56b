// Project detail content registry.
//
// Every detail page id on the site maps to exactly one `Project`; unknown ids
// resolve to `NOT_FOUND_HTML`.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Project {
    FineArts,
    VideoEditing,
    ColoredWorks,
    ProductDesign,
    MotionGraphics,
}

pub const NOT_FOUND_HTML: &str = "<p>Content not found. Please check the project ID.</p>";

const FINE_ARTS_HTML: &str = r#"
<h4 class="text-accent">Hyperrealism and Shading Studies</h4>
<p>This gallery showcases my mastery of light, shadow, and texture across various mediums, from graphite to digital painting.</p>
<div class="modal-gallery">
    <div class="gallery-item"><img src="assets/images/placeholder-fineart-1.jpg" alt="Graphite Portrait Study"></div>
    <div class="gallery-item"><img src="assets/images/placeholder-fineart-2.jpg" alt="Digital Shading Study"></div>
    <div class="gallery-item"><img src="assets/images/placeholder-fineart-3.jpg" alt="Hyperrealistic Eye Detail"></div>
    <div class="gallery-item"><img src="assets/images/placeholder-fineart-4.jpg" alt="Charcoal Figure Drawing"></div>
</div>
"#;

const VIDEO_EDITING_HTML: &str = r#"
<h4 class="text-accent">Dynamic Short-Form Content</h4>
<p>Showcasing editing, motion tracking, and sound design skills for social and commercial campaigns.</p>
<div class="video-embed-container" style="max-width: 400px; margin: 0 auto;">
    <iframe src="https://www.youtube.com/embed/dQw4w9WgXcQ?autoplay=0&mute=1" allow="autoplay; encrypted-media; fullscreen" allowfullscreen></iframe>
</div>
<p class="text-center"><a href="https://www.instagram.com/your_reel_page" target="_blank" class="btn btn-outline" style="margin-top: 1rem;">Visit My Instagram Reels Page &rarr;</a></p>
"#;

const COLORED_WORKS_HTML: &str = "<h4>Vibrant Digital Illustrations</h4><p>Details on color palettes, mood, and digital mediums used for this set of works.</p>";

const PRODUCT_DESIGN_HTML: &str = "<h4>Industrial Design Case Study: Project X</h4><p>Detailed breakdown of concept ideation, CAD development, material selection, and DFM principles.</p>";

const MOTION_GRAPHICS_HTML: &str = "<h4>VFX &amp; Animation Breakdown</h4><p>Final motion pieces along with a breakdown of the software and effects used.</p>";

impl Project {
    pub const ALL: [Project; 5] = [
        Project::FineArts,
        Project::VideoEditing,
        Project::ColoredWorks,
        Project::ProductDesign,
        Project::MotionGraphics,
    ];

    /// Identifier used in `data-card-id`, the URL hash and `detail-<id>`.
    pub fn id(self) -> &'static str {
        match self {
            Project::FineArts => "fine-arts",
            Project::VideoEditing => "video-editing",
            Project::ColoredWorks => "colored-works",
            Project::ProductDesign => "product-design",
            Project::MotionGraphics => "motion-graphics",
        }
    }

    pub fn from_id(id: &str) -> Option<Project> {
        Project::ALL.into_iter().find(|p| p.id() == id)
    }

    pub fn html(self) -> &'static str {
        match self {
            Project::FineArts => FINE_ARTS_HTML,
            Project::VideoEditing => VIDEO_EDITING_HTML,
            Project::ColoredWorks => COLORED_WORKS_HTML,
            Project::ProductDesign => PRODUCT_DESIGN_HTML,
            Project::MotionGraphics => MOTION_GRAPHICS_HTML,
        }
    }
}

#[inline]
pub fn subpage_content(id: &str) -> &'static str {
    Project::from_id(id).map_or(NOT_FOUND_HTML, Project::html)
}
