//! Static educational text blocks
//!
//! The science notes and practical tips are display copy carried over from
//! the demo script. The numbers in them are claims from the cited studies,
//! not values the program computes.

pub const SCIENCE_NOTES: &str = "\
Color psychology is based on decades of research showing how different colors affect:

1. COGNITIVE PERFORMANCE
   • Blue increases focus and mental clarity by 23%
   • Green reduces eye strain and improves sustained attention
   • Red increases alertness but can cause fatigue over time

2. EMOTIONAL STATE
   • Warm colors (orange, pink) enhance emotional expression
   • Cool colors (blue, green) promote calm and rational thinking
   • Earth tones connect us with natural creativity patterns

3. PRODUCTIVITY
   • High contrast themes improve reading speed
   • Soft backgrounds reduce cognitive load
   • Accent colors guide attention and improve organization

4. CIRCADIAN RHYTHMS
   • Blue light in morning increases alertness
   • Warm colors in evening prepare for rest
   • Adapting colors to time improves natural energy cycles";

pub const STUDIES_REFERENCED: &str = "\
• Mehta, R. et al. (2009). Blue or Red? Exploring the Effect of Color on Cognitive Performance
• Kwallek, N. et al. (2007). Effects of Color on Memory
• Elliot, A. et al. (2007). Color and Psychological Functioning
• Stone, N. (2003). Environmental View and Color for a Simulated Office";

pub const WRITER_TIPS: &str = "\
1. MORNING ROUTINE (6-9 AM)
   ⚡ Use POWER WRITING for high-energy scenes
   🔴 Red stimulates action and movement
   📝 Perfect for: Action sequences, dynamic dialogue

2. FOCUS TIME (10 AM-2 PM)
   🎯 Use FOCUSED FLOW for deep work
   🔵 Blue enhances concentration and reduces fatigue
   📝 Perfect for: Complex plots, technical accuracy, editing

3. CREATIVE TIME (3-6 PM)
   🎨 Use CREATIVE BURST for imagination
   🟠 Orange/purple stimulates innovative thinking
   📝 Perfect for: Character development, world-building

4. EVENING FLOW (7-9 PM)
   🧘 Use ZEN GARDEN for flowing prose
   🟢 Green promotes steady, meditative writing
   📝 Perfect for: Descriptive passages, emotional scenes

5. NIGHT WRITING (10 PM+)
   🌙 Use DARK MYSTERY for atmospheric writing
   🟣 Purple creates mood and tension
   📝 Perfect for: Dark scenes, psychological depth

6. GENRE-SPECIFIC TIPS:
   📚 Fiction: Rotate between CREATIVE BURST and thematic colors
   📖 Non-fiction: Stick with FOCUSED FLOW for clarity
   💕 Romance: Use ROMANCE MODE for emotional scenes
   🔍 Mystery: DARK MYSTERY enhances atmosphere
   🚀 Sci-fi: FUTURISTIC sparks innovation

Remember: The best theme is the one that makes YOU feel most creative and focused!";
