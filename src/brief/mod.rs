//! The client onboarding brief.
//!
//! A fixed, multi-page PDF assembled from hard-coded business copy: cover
//! page, initial research findings, the info needed from the client, the
//! four-phase process, and a closing action-item checklist. Five sections,
//! five explicit page starts; anything that overflows a section auto-paginates.

mod composer;
mod metrics;
mod style;

use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::info;

use composer::{Align, PageComposer, L_MARGIN, PAGE_W, R_MARGIN};
use style::{TextStyle, ACCENT, DARK, GRAY, LIGHT_BG};

const TITLE: &str = "Brother Brooklyn - Client Onboarding Brief";
const RUNNING_HEADER: &str = "Brother Brooklyn - Client Onboarding Brief  |  bayareaweb.design";

const BODY: TextStyle = TextStyle::regular(10.0, DARK);
const BODY_BOLD: TextStyle = TextStyle::bold(10.0, DARK);
const LEAD: TextStyle = TextStyle::regular(11.0, DARK);

/// What one build produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BriefSummary {
    pub pages: usize,
    pub bytes: u64,
}

/// The brief's drawing vocabulary: every primitive sets its style, then
/// delegates to the composer's generic cell / wrapped text / line / box calls.
struct BriefDoc {
    pdf: PageComposer,
}

impl BriefDoc {
    fn new() -> Result<Self> {
        let mut pdf = PageComposer::new(TITLE)?;
        pdf.set_running_header(RUNNING_HEADER);
        Ok(Self { pdf })
    }

    fn section_title(&mut self, title: &str) {
        self.pdf
            .cell(0.0, 10.0, title, &TextStyle::bold(14.0, DARK), Align::Left, true);
        self.pdf.rule(L_MARGIN, L_MARGIN + 60.0, ACCENT, 0.8);
        self.pdf.ln(6.0);
    }

    fn sub_title(&mut self, title: &str) {
        self.pdf
            .cell(0.0, 8.0, title, &TextStyle::bold(11.0, ACCENT), Align::Left, true);
        self.pdf.ln(2.0);
    }

    fn body_text(&mut self, text: &str) {
        self.pdf.multi_cell(0.0, 5.5, text, &BODY);
        self.pdf.ln(2.0);
    }

    fn bullet(&mut self, text: &str) {
        self.pdf.set_x(L_MARGIN + 10.0);
        self.pdf.cell(5.0, 5.5, "-", &BODY, Align::Left, false);
        self.pdf.multi_cell(0.0, 5.5, text, &BODY);
        self.pdf.ln(1.0);
    }

    fn bold_bullet(&mut self, bold_part: &str, rest: &str) {
        self.pdf.set_x(L_MARGIN + 10.0);
        self.pdf.cell(5.0, 5.5, "-", &BODY, Align::Left, false);
        self.pdf.write(5.5, bold_part, &BODY_BOLD);
        self.pdf.write(5.5, rest, &BODY);
        self.pdf.ln(6.5);
    }

    fn numbered_item(&mut self, number: usize, bold_part: &str, rest: &str) {
        self.pdf.cell(
            8.0,
            6.0,
            &format!("{number}."),
            &TextStyle::bold(10.0, ACCENT),
            Align::Left,
            false,
        );
        self.pdf.write(6.0, bold_part, &BODY_BOLD);
        self.pdf.write(6.0, rest, &BODY);
        self.pdf.ln(7.0);
    }

    fn highlight_box(&mut self, text: &str) {
        self.pdf.set_x(L_MARGIN + 5.0);
        let w = PAGE_W - L_MARGIN - R_MARGIN - 10.0;
        self.pdf.filled_multi_cell(w, 6.0, text, &BODY_BOLD, LIGHT_BG);
        self.pdf.ln(3.0);
    }

    fn cover_page(&mut self) {
        let pdf = &mut self.pdf;
        pdf.add_page();
        pdf.ln(50.0);

        pdf.rule(20.0, 190.0, ACCENT, 1.2);
        pdf.ln(10.0);

        pdf.cell(
            0.0,
            14.0,
            "Client Onboarding Brief",
            &TextStyle::bold(28.0, DARK),
            Align::Center,
            true,
        );
        pdf.ln(4.0);

        pdf.cell(
            0.0,
            10.0,
            "Brother Brooklyn  /  BKX Studios",
            &TextStyle::regular(16.0, ACCENT),
            Align::Center,
            true,
        );
        pdf.ln(8.0);

        pdf.rule(20.0, 190.0, ACCENT, 1.2);
        pdf.ln(20.0);

        pdf.cell(0.0, 7.0, "Prepared by:", &TextStyle::regular(11.0, GRAY), Align::Center, true);
        pdf.cell(0.0, 8.0, "Jesus Sanchez", &TextStyle::bold(13.0, DARK), Align::Center, true);
        pdf.cell(
            0.0,
            7.0,
            "bayareaweb.design",
            &TextStyle::regular(11.0, ACCENT),
            Align::Center,
            true,
        );
        pdf.ln(8.0);
        pdf.cell(0.0, 7.0, "February 2026", &TextStyle::regular(10.0, GRAY), Align::Center, true);
    }

    fn intro_page(&mut self) {
        self.pdf.add_page();

        self.pdf.multi_cell(0.0, 6.0, "Hey Brother Brooklyn,", &LEAD);
        self.pdf.ln(3.0);
        self.pdf.multi_cell(
            0.0,
            6.0,
            "Really excited to get started working together. I'm Jesus Sanchez from bayareaweb.design \
             -- I specialize in SEO, web development, and connecting brands with UGC influencers to drive real sales. \
             I've already started digging into your brand, your book, and the space you're in, \
             and I see a ton of opportunity here.",
            &LEAD,
        );
        self.pdf.ln(2.0);
        self.pdf.multi_cell(
            0.0,
            6.0,
            "I've received the book PDF -- thank you for that. I'm already going through it to extract \
             quotes and understand the core message. Before I go deeper, I want to walk you through my \
             process and what I still need from you so we can hit the ground running.",
            &LEAD,
        );
        self.pdf.ln(4.0);

        self.section_title("What I Found So Far (Initial Research)");

        self.bullet(
            "Your book Lessons From The School Of Hard Knocks sits at a really unique intersection -- \
             what I'd call \"Neuro-Theology\" -- blending neuroscience, subconscious reprogramming, and \
             Christian faith. That's a powerful niche that most authors in the Christian self-help space are NOT owning.",
        );
        self.bullet(
            "Right now your online presence is scattered across third-party platforms (Barnes & Noble, Amazon, \
             Xulon Press, eBay listings). None of those capture YOUR brand or YOUR voice -- they're generic retailer pages. \
             We need to change that.",
        );
        self.bullet(
            "There's a branding opportunity around the \"Brooklyn vs. Michigan\" story -- your radio appearances \
             on WUVS 103.7 in Muskegon give us local SEO wins, while the \"Brother Brooklyn\" name gives us \
             national appeal. We need to tell that story clearly on the new site.",
        );
        self.bullet(
            "Your direct competitors (Joyce Meyer's Battlefield of the Mind, Dr. Caroline Leaf's Switch On Your Brain, \
             T.D. Jakes) are all operating at a higher tier -- but they're missing the urban, street-level, peer-to-peer \
             angle that YOU bring. That's your lane.",
        );
        self.pdf.ln(2.0);
        self.highlight_box(
            "I still need to spend more time going deeper on the competitive research and keyword analysis, \
             which is why the competitor info I'm asking for below is the #1 priority.",
        );
    }

    fn needs_page(&mut self) {
        self.pdf.add_page();
        self.section_title("What I Need From You");

        self.sub_title("1. Competitor Analysis Info (THIS IS THE #1 PRIORITY)");
        self.body_text(
            "Before I build anything -- before design, before content, before SEO -- I need to run a full \
             competitor analysis. This is the foundation of everything. It's how I understand your industry, \
             identify the best keywords to target, find gaps in the market, and figure out exactly how to \
             position you to win in search results.",
        );
        self.body_text("Here's what I need from you:");
        self.pdf.ln(1.0);

        self.bold_bullet(
            "4-5 direct competitors ",
            "-- authors, speakers, pastors, or brands in your space that you see as competition \
             or that you aspire to be like. Think: who is your audience also following or buying from? \
             These can be big names (like Joyce Meyer, T.D. Jakes) or smaller authors in your lane.",
        );
        self.bold_bullet(
            "4-5 websites you like the look/feel of ",
            "-- doesn't have to be in your niche at all. Could be a musician's site, a clothing brand, \
             a podcast page -- anything where you think \"I want MY site to feel like THAT.\" \
             This helps me understand your taste and vision.",
        );
        self.pdf.ln(1.0);
        self.body_text("What I'll do with this info:");
        self.bullet("Analyze their websites, SEO rankings, keyword strategies, and content gaps");
        self.bullet("Identify which keywords they're ranking for that YOU should be targeting");
        self.bullet("Find opportunities they're missing that we can dominate");
        self.bullet("Study their site structure, calls to action, and conversion funnels");
        self.bullet("Build a keyword map that positions you to outrank them in your niche");
        self.pdf.ln(1.0);
        self.highlight_box(
            "This competitor analysis is what separates a website that just \"looks nice\" from a website \
             that actually ranks on Google and drives book sales. I can't start the SEO strategy without it.",
        );
        self.pdf.ln(2.0);

        self.sub_title("2. Your New Domain");
        self.body_text(
            "I'm going to secure BrotherBrooklyn.com for you -- that's the strongest play for brand recognition \
             and SEO. If it's already taken, BrotherBrooklynAuthor.com is our backup. Either way, we're getting \
             you a clean, professional domain that owns YOUR name.",
        );
        self.body_text(
            "Right now your presence is spread across Barnes & Noble, Amazon, Xulon Press, and eBay listings -- \
             none of that is YOUR platform. This new domain will be your home base, the hub where everything \
             points back to.",
        );
        self.pdf.ln(1.0);

        self.sub_title("3. Hosting (On Me -- Free)");
        self.body_text(
            "I'm putting you on my hosting at no cost to you. I'll set you up as a user on my hosting panel \
             (cPanel) so you have full access. As a bonus, you'll also get a custom professional email address \
             with your new domain -- something like contact@brotherbrooklyn.com or \
             brooklyn@brotherbrooklyn.com. Included, no extra charge.",
        );
        self.highlight_box("Zero hosting fees. Custom email. Full cPanel access. You're covered.");
        self.pdf.ln(2.0);

        self.sub_title("4. Your Best Email Address (For Analytics & Admin)");
        self.body_text(
            "I need a Gmail address (or the email you want to use long-term) so I can set up the following \
             accounts and add you as an administrator:",
        );
        self.bullet("Google Analytics (GA4) -- so we can track all website traffic, conversions, and user behavior");
        self.bullet(
            "Google Search Console (GSC) -- so we can monitor your search rankings, keyword performance, and indexing",
        );
        self.bullet("Google Business Profile -- for local SEO visibility in Michigan");
        self.bullet("Google Tag Manager -- for tracking pixels, events, and conversion goals");
        self.pdf.ln(1.0);
        self.body_text(
            "You'll be the owner of all these accounts. I'll set everything up and add myself as an administrator \
             so I can manage them for you, but you'll always have full access and control over your own data.",
        );
        self.highlight_box(
            "A Gmail address works best for this since all these tools are Google products. If you don't have \
             one you want to use for business, let me know and we'll set one up.",
        );
        self.pdf.ln(2.0);

        self.sub_title("5. Your Goals");
        self.bullet(
            "What does success look like for you in the next 6-12 months? More book sales? Speaking engagements? \
             Online course? Merch? All of the above?",
        );
        self.bullet(
            "Are you planning any new projects under BKX Studios (audiobook, video course, second book, podcast)?",
        );
        self.pdf.ln(2.0);

        self.sub_title("6. Social Media Links -- ALL of Them");
        self.body_text("This is critical. Send me every social media profile you currently have:");
        self.bullet("Instagram");
        self.bullet("TikTok");
        self.bullet("YouTube");
        self.bullet("Facebook");
        self.bullet("Twitter / X");
        self.bullet("LinkedIn");
        self.bullet("Any others");
        self.pdf.ln(2.0);
        self.highlight_box(
            "If you're NOT on TikTok or Instagram yet -- I need to know ASAP. These are non-negotiable platforms \
             for selling books in 2026. I can help you get set up on both.",
        );
        self.pdf.ln(1.0);
        self.body_text(
            "TikTok especially -- #ChristianBookTok is a massive book sales driver right now, and your \
             \"Neuro-Theology\" content is perfect for it.",
        );
        self.body_text(
            "You should also be signing up for podcast directories (Apple Podcasts, Spotify for Podcasters) \
             even if you're not launching your own podcast yet -- being listed and guesting on other shows is a \
             huge authority builder.",
        );

        self.sub_title("7. Visual Assets -- Headshots & Photos");
        self.body_text("I'm going to need:");
        self.bold_bullet("Professional headshots ", "(multiple poses/looks if possible)");
        self.bold_bullet("Event/speaking photos ", "-- anything of you at events, on radio, speaking, etc.");
        self.bold_bullet("Book cover ", "in the highest resolution you have");
        self.bold_bullet("BKX Studios logo ", "(if you have one) in vector or PNG format");
        self.pdf.ln(2.0);
        self.highlight_box(
            "If you don't have professional photos yet, I'd strongly recommend scheduling a shoot. \
             The visual style we're going for -- dark, high-contrast, cinematic \"Gritty Luxury\" -- requires strong imagery.",
        );
    }

    fn process_page(&mut self) {
        self.pdf.add_page();
        self.section_title("The Process -- How This Works");
        self.body_text(
            "I want to be upfront about how I work so we're on the same page from day one. \
             This isn't a \"throw up a website and hope for the best\" situation. What you're paying me for \
             is the strategy, the expertise, and the execution of a real game plan -- a blueprint built \
             specifically for your brand, your market, and your goals. Here's how the process breaks down:",
        );
        self.pdf.ln(2.0);

        self.sub_title("PHASE 1: The Blueprint (3-5 Hours of Deep Work)");
        self.body_text(
            "Once I have your competitor list and email, I'm going heads-down for 3 to 5 hours to build \
             your custom strategy blueprint. This is the foundation everything else is built on. During this phase I'll:",
        );
        self.bullet(
            "Run a full competitor analysis -- their SEO rankings, keywords, content gaps, what's working, what's not",
        );
        self.bullet("Identify the gaps in your market that we need to close");
        self.bullet("Build your keyword strategy and content roadmap");
        self.bullet("Map out your site structure, pages, and conversion funnel");
        self.bullet(
            "Set up your Google Analytics (GA4), Google Search Console (GSC), Google Business Profile, \
             and Google Tag Manager -- all under your email so you own everything",
        );
        self.pdf.ln(1.0);
        self.highlight_box(
            "This blueprint is the most important part of the entire project. It's the difference between \
             guessing and knowing. Every decision we make after this -- design, content, SEO, influencer \
             outreach -- will be driven by this strategy. This is what you're paying for: my experience \
             in knowing exactly what to build and why.",
        );
        self.pdf.ln(2.0);

        self.sub_title("PHASE 2: Trello Board Setup (Additional Hours)");
        self.body_text(
            "After the blueprint is done, I'll build out a shared Trello board for the entire project. \
             This is how we stay on the same page throughout the build. The board will include:",
        );
        self.bullet("Every task, milestone, and deliverable -- organized by phase");
        self.bullet("Clear status tracking so you always know where we are");
        self.bullet("Content calendar for social media and blog posts");
        self.bullet("Influencer outreach pipeline and tracking");
        self.bullet("SEO implementation checklist");
        self.pdf.ln(1.0);
        self.body_text(
            "You'll have full access to this board. No guessing, no \"what's happening with my site?\" -- \
             you'll see the progress in real time. This keeps us both accountable and moving forward.",
        );
        self.pdf.ln(2.0);

        self.sub_title("PHASE 3: Strategy Review (We Go Over It Together)");
        self.body_text(
            "Once the blueprint and Trello board are built, we'll schedule a call to go over the full strategy \
             together. I'll walk you through:",
        );
        self.bullet("The competitor analysis findings -- what I learned and where the opportunities are");
        self.bullet("The keyword strategy -- exactly what we're targeting and why");
        self.bullet("The site plan -- what pages we're building, the layout, the conversion flow");
        self.bullet("The content and influencer roadmap -- what gets published, when, and where");
        self.pdf.ln(1.0);
        self.body_text(
            "This is your chance to ask questions, give feedback, and make sure you're 100% aligned with \
             the direction before we start building. After this call, we execute.",
        );
        self.pdf.ln(2.0);

        self.sub_title("PHASE 4: Execution -- Build, Launch, Grow");
        self.body_text("Once we're aligned on the strategy, this is where we go live:");
        self.pdf.ln(1.0);

        self.bold_bullet(
            "Fastest way to push book sales: UGC via Influencers. ",
            "I'll identify and connect you with micro-influencers in the Christian lifestyle, mental health, \
             and urban culture spaces on TikTok, Instagram, and YouTube. We send them the book, they create \
             content, their audience buys. This can move the needle in weeks.",
        );
        self.bold_bullet(
            "The long game: SEO Content. ",
            "Building out SEO content on your new site -- blog posts targeting keywords like \"Christian books \
             on subconscious mind,\" \"how to renew your mind scientifically,\" \"overcoming trauma faith\" -- \
             so Google sends you free organic traffic for years. Takes 3-6 months to ramp but compounds over time.",
        );
        self.bold_bullet(
            "Social media starts NOW. ",
            "Before the website even launches, we should be posting content -- quote graphics from your book, \
             short video clips of you speaking, stitches of trending content. I'm already extracting quotes \
             from the book PDF you sent me to start building this content library.",
        );
    }

    fn action_items_page(&mut self) {
        self.pdf.add_page();
        self.section_title("Your Action Items (Quick Summary)");
        self.body_text(
            "Here's what I need from you so I can start building the blueprint. \
             The sooner I get these, the sooner I can get to work:",
        );
        self.pdf.ln(2.0);

        let items = [
            (
                "Send me 4-5 competitors",
                " + 4-5 websites you like the design of (THIS IS #1 PRIORITY)",
            ),
            (
                "Send me your Gmail address",
                " -- I need this to set up GA4, Search Console, Trello, and all your accounts",
            ),
            ("Share your goals", " for the next 6-12 months"),
            (
                "Send me all your social media links",
                " (and tell me which platforms you're NOT on yet)",
            ),
            (
                "Send me headshots, photos, logos",
                " -- anything visual you have",
            ),
        ];
        for (i, (bold, rest)) in items.iter().enumerate() {
            self.numbered_item(i + 1, bold, rest);
        }

        self.pdf.ln(4.0);
        self.highlight_box(
            "Once I have this info, I'm going heads-down on the blueprint. After that, we'll set up the \
             Trello board, review the strategy together, and then we build. That's when the real work starts.",
        );

        // Closing
        self.pdf.ln(6.0);
        self.pdf.rule(20.0, 190.0, ACCENT, 0.6);
        self.pdf.ln(8.0);

        self.pdf.multi_cell(0.0, 6.0, "Let's build something special.", &LEAD);
        self.pdf.ln(6.0);
        self.pdf.multi_cell(0.0, 6.0, "Talk soon,", &LEAD);
        self.pdf.ln(2.0);
        self.pdf
            .cell(0.0, 7.0, "Jesus Sanchez", &TextStyle::bold(12.0, DARK), Align::Left, true);
        self.pdf.cell(
            0.0,
            6.0,
            "bayareaweb.design",
            &TextStyle::regular(10.0, ACCENT),
            Align::Left,
            true,
        );
    }
}

/// Build the onboarding brief and write it to `output`.
pub fn build_brief(output: &Path) -> Result<BriefSummary> {
    let mut doc = BriefDoc::new()?;

    doc.cover_page();
    doc.intro_page();
    doc.needs_page();
    doc.process_page();
    doc.action_items_page();

    let pages = doc.pdf.page_count();
    let bytes = doc.pdf.finalize(output)?;
    info!("Wrote {pages}-page brief to {} ({bytes} bytes)", output.display());

    Ok(BriefSummary { pages, bytes })
}
