use super::*;

fn date_format(parts: &DateParts<'_>) -> String {
    format!(
        "{}{} {} {}, {} — {}",
        parts.prefix, parts.weekday, parts.month, parts.day, parts.year, parts.time
    )
}

pub static EN: Translations = Translations {
    common: CommonStrings {
        cancel: "Cancel",
        delete: "Delete",
        edit: "Edit",
        click_to_edit: "Click to edit...",
        add_prefix: "Add",
        loading: "Loading records...",
    },
    auth: AuthStrings {
        subtitle: "Process Journal",
        app_name: "Estela",
        tagline: "Your space to record, reflect, and grow",
        sign_in: "Sign in with Google",
        session_info: "Introspection exercises",
    },
    nav: NavStrings {
        logout: "Sign out",
        show_guide: "View exercise guide",
        hide_guide: "Hide guide",
    },
    greeting: GreetingStrings {
        morning: "Good morning",
        afternoon: "Good afternoon",
        evening: "Good evening",
    },
    exercises: ExerciseStrings {
        two_flags: TwoFlagsExerciseStrings {
            name: "Two Flags",
            icon: "🏴",
            guide: TwoFlagsGuideStrings {
                section1_label: "✨ Stardust:",
                section1_desc: "Serenity, flow, being yourself.",
                section2_label: "🏴 The Tangle:",
                section2_desc: "Confusion, forced adaptation, discomfort, feeling trapped.",
                instruction: "Record moments of both flags each day.",
            },
            add_label: "New daily record",
            empty_message: "No records yet. Create your first daily record.",
        },
        significant_bond: FreeformExerciseStrings {
            name: "Significant Bond",
            icon: "🕊",
            description: "Write about a significant relationship from your formative years, before disillusionment accumulated. Recover the original desire for connection.",
            questions: "What is your first memory of feeling truly close and understood? What did you hope for from that connection? When did the dynamic begin to shift? What patterns do you recognize in your later relationships?",
            add_label: "New entry",
            empty_message: "When you are ready, create your first entry. No rush.",
        },
        idealized_expectations: FreeformExerciseStrings {
            name: "Idealized Expectations",
            icon: "🪞",
            description: "Examine the idealized expectations you project onto relationships. If this ideal version existed as a real person, would they be part of your inner circle?",
            questions: "What qualities do you idealize? What implicit criticisms underlie this ideal? Describe them as a real person. Are you genuinely drawn to them? Are you attracted to what they represent or to who you truly become with them?",
            add_label: "New reflection",
            empty_message: "When you are ready, begin your first reflection.",
        },
    },
    time: TimeStrings {
        today: "Today",
        yesterday: "Yesterday",
        days: [
            "Sunday",
            "Monday",
            "Tuesday",
            "Wednesday",
            "Thursday",
            "Friday",
            "Saturday",
        ],
        months: [
            "January",
            "February",
            "March",
            "April",
            "May",
            "June",
            "July",
            "August",
            "September",
            "October",
            "November",
            "December",
        ],
        date_format,
    },
    two_flags: TwoFlagsStrings {
        new_record: "New daily record",
        date_time_label: "Date/Time:",
        section1_label: "Stardust",
        section1_placeholder: "Add moments of serenity and authenticity...",
        section2_label: "The Tangle",
        section2_placeholder: "Add moments of tangle/survival...",
        learning_label: "What did I learn today?",
        learning_placeholder: "Daily reflection...",
        delete_record: "Delete record",
        delete_record_confirm: "Are you sure you want to delete this entire record?",
        delete_item_confirm: "Are you sure you want to delete this item?",
        no_records: "No records yet. Create your first daily record.",
    },
    freeform: FreeformStrings {
        instruction_label: "Instructions:",
        questions_label: "Guiding questions:",
        date_label: "Date:",
        title_placeholder: "Entry title...",
        content_placeholder: "Write here...",
        no_title: "Untitled",
        delete_entry: "Delete entry",
        delete_entry_confirm: "Are you sure you want to delete this entry?",
    },
    theme: ThemeStrings {
        light: "Light mode",
        dark: "Dark mode",
    },
    messages: MessageStrings {
        no_hurry: "No rush, no pressure",
    },
    language: LanguageStrings {
        toggle: "Change language",
    },
    marquee: MarqueeStrings {
        journal: "Process Journal",
    },
};
