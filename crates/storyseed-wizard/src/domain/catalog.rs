//! Predefined choices offered by the wizard's grids.

/// Feels offered in the first grid.
pub const FEEL_CHOICES: [&str; 28] = [
    "Action",
    "Drama",
    "Romance",
    "Comedy",
    "Isekai",
    "Surreal",
    "Cyberpunk",
    "Steampunk",
    "Mythic",
    "Shojo",
    "Pulpy",
    "Noir",
    "Gothic",
    "Sci-Fi",
    "Magical Realism",
    "Fantasy",
    "Horror",
    "Shonen",
    "Slice of Life",
    "Mecha",
    "Utopian",
    "Satirical",
    "Space Opera",
    "Historical",
    "Dystopian",
    "War",
    "Cozy",
    "Cutesy",
];

/// Story draws offered in the second grid.
pub const STORY_DRAW_CHOICES: [&str; 7] = [
    "World Building",
    "Plot Twists",
    "Emotional Journey",
    "Action Sequences",
    "Mystery",
    "Romance",
    "Humor",
];
