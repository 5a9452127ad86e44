//! Per-topic phrase fragments used by the topic composer.

use crate::topics::Topic;

/// Interchangeable phrases for one topic, grouped by the slot they fill.
#[derive(Debug, Clone, Copy)]
pub struct FragmentSet {
    pub opening: &'static [&'static str],
    pub hook: &'static [&'static str],
    pub context: &'static [&'static str],
    pub reflection: &'static [&'static str],
    pub cta: &'static [&'static str],
    pub emoji: &'static [&'static str],
}

/// Topic whose fragments are used when a topic has none of its own.
pub const DEFAULT_TOPIC: Topic = Topic::Technology;

static TECHNOLOGY: FragmentSet = FragmentSet {
    opening: &[
        "Just spent the week exploring",
        "I've been experimenting with",
        "Finally took a deep dive into",
    ],
    hook: &[
        "a tool that quietly rewires how we build software.",
        "an approach that turns weeks of setup into minutes.",
        "a stack that makes complex systems feel simple again.",
    ],
    context: &[
        "The best innovations remove friction instead of adding features.",
        "Fewer moving parts meant faster releases for the whole team.",
        "It reminded me that simplicity is a competitive advantage.",
    ],
    reflection: &[
        "Technology moves fast, but the fundamentals still win: clear problems, small steps, honest feedback.",
        "Every tool is only as good as the habits we build around it.",
        "The real upgrade wasn't the software. It was how our team started thinking about problems.",
    ],
    cta: &[
        "What's the one tool that changed how you work?",
        "Which technology surprised you most this year?",
        "What would you try first?",
    ],
    emoji: &["🚀", "💻", "⚙️"],
};

static AI: FragmentSet = FragmentSet {
    opening: &[
        "Spent the morning working alongside",
        "Been testing",
        "Took a closer look at",
    ],
    hook: &[
        "AI assistants that amplify rather than replace our judgment.",
        "machine learning models that explain their own decisions.",
        "automation that hands the boring parts back to the machines.",
    ],
    context: &[
        "The output was good, but the conversation it sparked was better.",
        "The key was knowing when to collaborate with AI and when to trust instinct.",
        "Human review turned a decent draft into something genuinely useful.",
    ],
    reflection: &[
        "AI isn't replacing human creativity. It's raising the floor so we can reach higher.",
        "The future belongs to people who can dance between intuition and automation.",
        "The best results came from treating AI as a collaborator, not an oracle.",
    ],
    cta: &[
        "How are you using AI in your daily work?",
        "Where do you draw the line between automation and judgment?",
        "What's one task you'd never hand to an AI?",
    ],
    emoji: &["🤖", "🧠", "✨"],
};

static ENTREPRENEURSHIP: FragmentSet = FragmentSet {
    opening: &[
        "Three years ago I launched",
        "Looking back at the early days of",
        "Still thinking about the moment we started",
    ],
    hook: &[
        "a product nobody asked for, and learned everything the hard way.",
        "a side project that refused to stay small.",
        "a company with two laptops and a lot of optimism.",
    ],
    context: &[
        "Every 'no' became a lesson, every setback a stepping stone.",
        "Our first customers taught us more than any pitch deck could.",
        "Cash flow, not ideas, decided which experiments survived.",
    ],
    reflection: &[
        "Resilience isn't about avoiding failure. It's about shortening the distance between falling and getting up.",
        "The breakthrough is usually one honest conversation with a customer away.",
        "Building something from nothing is the best business school there is.",
    ],
    cta: &[
        "What's the hardest lesson your business taught you?",
        "Founders: what would you tell your day-one self?",
        "What kept you going when the numbers didn't?",
    ],
    emoji: &["💪", "🚀", "🌱"],
};

static LEADERSHIP: FragmentSet = FragmentSet {
    opening: &[
        "One of the best leadership lessons I've learned came from",
        "Reflecting on a tough week of",
        "Something I keep coming back to after years of",
    ],
    hook: &[
        "a team member who challenged my plan in front of everyone.",
        "stepping back and letting the team own the decision.",
        "a project that failed while the team grew stronger.",
    ],
    context: &[
        "Trust grows when people see that speaking up is safe.",
        "Clarity about the why made the how almost effortless.",
        "The quietest person in the room had the answer all along.",
    ],
    reflection: &[
        "Great leaders don't create followers. They create more leaders.",
        "Leadership is less about having answers and more about asking better questions.",
        "Empathy isn't a soft skill. It's the foundation every high-performing team stands on.",
    ],
    cta: &[
        "What's the best leadership advice you've ever received?",
        "How do you build trust on a new team?",
        "Which leader shaped the way you work today?",
    ],
    emoji: &["👑", "🤝", "🌟"],
};

static CAREER: FragmentSet = FragmentSet {
    opening: &[
        "Five years ago I almost turned down",
        "A quick reflection on",
        "People often ask me about",
    ],
    hook: &[
        "the role that completely changed my career path.",
        "switching industries halfway through my career.",
        "the skill that opened more doors than my degree.",
    ],
    context: &[
        "Growth rarely feels comfortable while it's happening.",
        "The best opportunities came from people, not job boards.",
        "Learning in public accelerated everything.",
    ],
    reflection: &[
        "Your career isn't a ladder. It's a portfolio of experiences you keep curating.",
        "Invest in skills that compound: communication, curiosity, and follow-through.",
        "Say yes to the stretch assignment. You'll grow into it.",
    ],
    cta: &[
        "What career move are you most proud of?",
        "What skill would you tell a new graduate to learn first?",
        "Who opened a door for you early on?",
    ],
    emoji: &["📈", "🎓", "💼"],
};

static TRENDS: FragmentSet = FragmentSet {
    opening: &[
        "Been tracking",
        "The data keeps pointing to",
        "Can't stop thinking about",
    ],
    hook: &[
        "a quiet shift in how companies buy software.",
        "the rise of small, specialised teams outperforming large ones.",
        "how quickly remote-first habits became the default.",
    ],
    context: &[
        "Early adopters are already reporting measurable gains.",
        "What looked like a niche experiment is now showing up in earnings calls.",
        "The pattern repeats across industries, not just tech.",
    ],
    reflection: &[
        "Trends don't wait for permission. The question is whether we adapt on purpose or by accident.",
        "The winners won't be the fastest movers, but the best listeners.",
        "Every shift creates room for people willing to learn in public.",
    ],
    cta: &[
        "Are you seeing the same shift in your industry?",
        "Which trend are you betting on this year?",
        "What signal do you watch most closely?",
    ],
    emoji: &["📊", "🔍", "🌍"],
};

/// Fragments authored for `topic`, if any.
#[must_use]
pub fn authored(topic: Topic) -> Option<&'static FragmentSet> {
    match topic {
        Topic::Technology => Some(&TECHNOLOGY),
        Topic::Ai => Some(&AI),
        Topic::Entrepreneurship => Some(&ENTREPRENEURSHIP),
        Topic::Leadership => Some(&LEADERSHIP),
        Topic::Career => Some(&CAREER),
        Topic::Trends => Some(&TRENDS),
        Topic::Branding | Topic::Projects => None,
    }
}

/// Fragments for `topic`, falling back to [`DEFAULT_TOPIC`].
#[must_use]
pub fn fragments_for(topic: Topic) -> &'static FragmentSet {
    authored(topic).unwrap_or(&TECHNOLOGY)
}
