//! Sample posts written into an empty store on first start.
//!
//! Post `N` has id `"N"`, author id `"authorN"` and is dated `N` days before the
//! seeding time, so the list is already newest first.

use crate::model::Blog;
use chrono::{DateTime, Duration, Utc};

struct SamplePost {
    title: &'static str,
    category: &'static str,
    author: &'static str,
    image: &'static str,
    content: &'static str,
}

const SAMPLE_POSTS: [SamplePost; 10] = [
    SamplePost {
        title: "The Future of Artificial Intelligence in 2024",
        category: "Tech",
        author: "Sarah Johnson",
        image: "https://images.unsplash.com/photo-1677442136019-21780ecad995?w=800&h=600&fit=crop",
        content: "Artificial Intelligence continues to revolutionize industries across the globe. \
            From healthcare to finance, AI is transforming how we work and live. In this \
            comprehensive guide, we'll explore the latest trends, breakthroughs, and what the \
            future holds for AI technology.\n\n\
            Machine learning algorithms are becoming more sophisticated, enabling computers to \
            process and understand complex data patterns. Deep learning, a subset of AI, has \
            shown remarkable progress in image recognition, natural language processing, and \
            autonomous systems.\n\n\
            The integration of AI in everyday applications is no longer a distant dream. Smart \
            assistants, recommendation systems, and predictive analytics are just the beginning. \
            As we move forward, ethical considerations and responsible AI development will play \
            crucial roles in shaping the future of this technology.",
    },
    SamplePost {
        title: "Minimalist Design Principles for Modern Websites",
        category: "Design",
        author: "Michael Chen",
        image: "https://images.unsplash.com/photo-1561070791-2526d30994b5?w=800&h=600&fit=crop",
        content: "Minimalism in web design isn't just about using less—it's about using less to \
            achieve more. Clean layouts, ample white space, and purposeful typography create \
            experiences that are both beautiful and functional.\n\n\
            The key principles of minimalist design include:\n\
            - Focus on essential elements\n\
            - Use of negative space\n\
            - Limited color palette\n\
            - Clear typography hierarchy\n\
            - Intuitive navigation\n\n\
            When done right, minimalist design reduces cognitive load, improves user experience, \
            and creates a timeless aesthetic. This approach has been embraced by leading tech \
            companies and continues to influence modern web design trends.",
    },
    SamplePost {
        title: "10 Healthy Morning Habits for a Productive Day",
        category: "Lifestyle",
        author: "Emily Rodriguez",
        image: "https://images.unsplash.com/photo-1490645935967-10de6ba17061?w=800&h=600&fit=crop",
        content: "Starting your day right sets the tone for everything that follows. Establishing \
            healthy morning habits can dramatically improve your productivity, mood, and overall \
            well-being.\n\n\
            Here are ten proven morning habits:\n\
            1. Wake up at a consistent time\n\
            2. Drink a glass of water\n\
            3. Practice mindfulness or meditation\n\
            4. Exercise or stretch\n\
            5. Eat a nutritious breakfast\n\
            6. Review your goals for the day\n\
            7. Avoid checking your phone immediately\n\
            8. Get some natural sunlight\n\
            9. Practice gratitude\n\
            10. Plan your most important tasks\n\n\
            These habits don't need to be implemented all at once. Start with one or two and \
            gradually build your morning routine. Consistency is key to making these habits \
            stick and seeing real benefits in your daily life.",
    },
    SamplePost {
        title: "Exploring the Hidden Gems of Southeast Asia",
        category: "Travel",
        author: "David Kim",
        image: "https://images.unsplash.com/photo-1537996194471-e657df975ab4?w=800&h=600&fit=crop",
        content: "Southeast Asia is a treasure trove of stunning landscapes, rich cultures, and \
            unforgettable experiences. Beyond the well-trodden tourist paths lie hidden gems \
            waiting to be discovered.\n\n\
            From the pristine beaches of the Philippines to the ancient temples of Myanmar, each \
            destination offers something unique. The region's diverse cuisine, warm hospitality, \
            and affordable travel costs make it an ideal destination for adventurers and budget \
            travelers alike.\n\n\
            Whether you're seeking adventure, relaxation, or cultural immersion, Southeast Asia \
            has it all. This guide will take you through some of the most beautiful and \
            less-crowded destinations that will leave you with memories to last a lifetime.",
    },
    SamplePost {
        title: "The Art of Homemade Sourdough Bread",
        category: "Food",
        author: "Jessica Martinez",
        image: "https://images.unsplash.com/photo-1549931319-a545dcf3bc73?w=800&h=600&fit=crop",
        content: "There's something magical about baking your own sourdough bread. The process of \
            creating a living starter, nurturing it, and transforming simple ingredients into a \
            beautiful, crusty loaf is both science and art.\n\n\
            Sourdough bread has been made for thousands of years, and the technique has been \
            passed down through generations. The natural fermentation process not only creates \
            that distinctive tangy flavor but also makes the bread easier to digest and more \
            nutritious.\n\n\
            This guide will walk you through:\n\
            - Creating and maintaining a sourdough starter\n\
            - The perfect dough consistency\n\
            - Shaping and scoring techniques\n\
            - Baking tips for that perfect crust\n\
            - Troubleshooting common issues\n\n\
            With patience and practice, you'll be creating bakery-quality sourdough bread in \
            your own kitchen.",
    },
    SamplePost {
        title: "Building Mental Resilience: A Complete Guide",
        category: "Health",
        author: "Robert Taylor",
        image: "https://images.unsplash.com/photo-1506126613408-eca07ce68773?w=800&h=600&fit=crop",
        content: "Mental resilience is the ability to bounce back from adversity, adapt to change, \
            and keep going in the face of challenges. It's not about avoiding stress or difficult \
            situations, but rather developing the capacity to handle them effectively.\n\n\
            Research shows that resilient people share certain characteristics:\n\
            - Strong problem-solving skills\n\
            - Ability to regulate emotions\n\
            - Social support networks\n\
            - Sense of purpose and meaning\n\
            - Optimistic outlook\n\n\
            Building resilience is a process that involves developing healthy coping strategies, \
            maintaining strong relationships, and cultivating a growth mindset. This \
            comprehensive guide provides practical techniques and exercises to help you build \
            your mental resilience and thrive in challenging times.",
    },
    SamplePost {
        title: "Remote Work: Strategies for Success in 2024",
        category: "Business",
        author: "Amanda Wilson",
        image: "https://images.unsplash.com/photo-1521791136064-7986c2920216?w=800&h=600&fit=crop",
        content: "Remote work has evolved from a trend to a fundamental shift in how we approach \
            employment. As more companies embrace flexible work arrangements, understanding how \
            to succeed in a remote environment has become essential.\n\n\
            Key strategies for remote work success include:\n\
            - Creating a dedicated workspace\n\
            - Establishing clear boundaries between work and personal life\n\
            - Maintaining regular communication with your team\n\
            - Using productivity tools effectively\n\
            - Prioritizing self-care and work-life balance\n\n\
            The future of work is flexible, and those who master remote work skills will have a \
            significant advantage. This guide covers everything from setting up your home office \
            to building strong virtual relationships with colleagues.",
    },
    SamplePost {
        title: "Sustainable Living: Small Changes, Big Impact",
        category: "Lifestyle",
        author: "Lisa Anderson",
        image: "https://images.unsplash.com/photo-1473341304170-971dccb5ac1e?w=800&h=600&fit=crop",
        content: "Living sustainably doesn't require a complete lifestyle overhaul. Small, \
            consistent changes can make a significant difference for both the environment and \
            your wallet.\n\n\
            Simple sustainable practices include:\n\
            - Reducing single-use plastics\n\
            - Choosing energy-efficient appliances\n\
            - Supporting local and sustainable products\n\
            - Reducing food waste\n\
            - Using public transportation or cycling\n\
            - Composting organic waste\n\n\
            Every action counts, and when multiplied across communities, these small changes \
            create substantial positive impact. This article explores practical ways to \
            incorporate sustainability into your daily routine without feeling overwhelmed.",
    },
    SamplePost {
        title: "The Evolution of User Interface Design",
        category: "Design",
        author: "James Park",
        image: "https://images.unsplash.com/photo-1561070791-2526d30994b5?w=800&h=600&fit=crop",
        content: "User interface design has come a long way since the early days of computing. \
            From command-line interfaces to touch screens and voice commands, the way we interact \
            with technology continues to evolve.\n\n\
            Modern UI design focuses on:\n\
            - User-centered design principles\n\
            - Accessibility and inclusivity\n\
            - Responsive and adaptive layouts\n\
            - Micro-interactions and animations\n\
            - Dark mode and customization options\n\n\
            As technology advances, we're seeing new trends emerge, including augmented reality \
            interfaces, gesture-based controls, and AI-powered personalization. Understanding \
            these trends helps designers create experiences that feel intuitive and delightful.",
    },
    SamplePost {
        title: "Blockchain Technology: Beyond Cryptocurrency",
        category: "Tech",
        author: "Alex Thompson",
        image: "https://images.unsplash.com/photo-1639762681485-074b7f938ba0?w=800&h=600&fit=crop",
        content: "While blockchain is often associated with cryptocurrencies, its applications \
            extend far beyond digital currencies. This revolutionary technology offers solutions \
            for supply chain management, healthcare records, voting systems, and more.\n\n\
            Blockchain's key features include:\n\
            - Decentralization\n\
            - Immutability\n\
            - Transparency\n\
            - Security through cryptography\n\
            - Smart contracts\n\n\
            Industries are exploring blockchain for everything from tracking food safety to \
            managing digital identities. As the technology matures, we're seeing more practical \
            applications that solve real-world problems. This article explores the current state \
            of blockchain technology and its potential future applications.",
    },
];

/// The ten sample posts, dated relative to `now`.
pub fn sample_blogs(now: DateTime<Utc>) -> Vec<Blog> {
    SAMPLE_POSTS
        .iter()
        .enumerate()
        .map(|(i, post)| {
            let n = i as i64 + 1;
            Blog {
                id: n.to_string(),
                title: post.title.to_string(),
                category: post.category.to_string(),
                content: post.content.to_string(),
                image: Some(post.image.to_string()),
                author: post.author.to_string(),
                author_id: format!("author{}", n),
                date: now - Duration::days(n),
            }
        })
        .collect()
}
