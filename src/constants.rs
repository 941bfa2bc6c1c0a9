// DOM contract between the page markup and the motion runtime.
// Elements opt in through data attributes; outputs are written back as CSS
// custom properties for the stylesheet to consume.

// Parallax elements
pub const PARALLAX_SELECTOR: &str = "[data-parallax]";
pub const ATTR_PARALLAX_FACTOR: &str = "data-parallax-factor";
pub const ATTR_PARALLAX_LIMIT_X: &str = "data-parallax-limit-x";
pub const ATTR_PARALLAX_LIMIT_Y: &str = "data-parallax-limit-y";
pub const ATTR_PARALLAX_INITIAL_X: &str = "data-parallax-initial-x";
pub const ATTR_PARALLAX_INITIAL_Y: &str = "data-parallax-initial-y";
pub const ATTR_PARALLAX_REVERSED: &str = "data-parallax-reversed";
pub const ATTR_PARALLAX_ROTATION: &str = "data-parallax-rotation";
pub const ATTR_PARALLAX_SCALE: &str = "data-parallax-scale";
pub const ATTR_PARALLAX_GLARE: &str = "data-parallax-glare";

// Per-element spring overrides (parallax and header)
pub const ATTR_SPRING_STIFFNESS: &str = "data-spring-stiffness";
pub const ATTR_SPRING_DAMPING: &str = "data-spring-damping";
pub const ATTR_SPRING_MASS: &str = "data-spring-mass";

pub const CSS_PARALLAX_X: &str = "--parallax-x";
pub const CSS_PARALLAX_Y: &str = "--parallax-y";
pub const CSS_PARALLAX_ROTATE_X: &str = "--parallax-rotate-x";
pub const CSS_PARALLAX_ROTATE_Y: &str = "--parallax-rotate-y";
pub const CSS_PARALLAX_SCALE: &str = "--parallax-scale";
pub const CSS_GLARE_OPACITY: &str = "--glare-opacity";
pub const CSS_GLARE_X: &str = "--glare-x";
pub const CSS_GLARE_Y: &str = "--glare-y";

// Header
pub const HEADER_SELECTOR: &str = "[data-motion-header]";
pub const ATTR_SCROLL_START: &str = "data-scroll-start";
pub const ATTR_SCROLL_END: &str = "data-scroll-end";
pub const ATTR_SCROLL_THRESHOLD: &str = "data-scroll-threshold";
pub const ATTR_SCROLLED: &str = "data-scrolled";
pub const CSS_HEADER_HEIGHT: &str = "--header-height";
pub const CSS_HEADER_BACKDROP: &str = "--header-backdrop";

// Carousels
pub const CAROUSEL_SELECTOR: &str = "[data-carousel]";
pub const SLIDE_SELECTOR: &str = "[data-carousel-slide]";
pub const PREV_SELECTOR: &str = "[data-carousel-prev]";
pub const NEXT_SELECTOR: &str = "[data-carousel-next]";
pub const DOT_SELECTOR: &str = "[data-carousel-dot]";
pub const TOGGLE_SELECTOR: &str = "[data-carousel-toggle]";
pub const ATTR_AUTOPLAY: &str = "data-autoplay";
pub const ATTR_INTERVAL_MS: &str = "data-interval-ms";
pub const ATTR_ACTIVE_INDEX: &str = "data-active-index";
pub const ATTR_DIRECTION: &str = "data-direction";
pub const ATTR_AUTOPLAYING: &str = "data-autoplaying";
pub const ATTR_HOVERING: &str = "data-hovering";
pub const ATTR_ACTIVE: &str = "data-active";
