use super::keys::{
    ChoiceTexts, CommonTexts, ConfirmTexts, FieldTexts, FormTexts, HelpTexts, HomeTexts,
    NavTexts, NotifyTexts, TableTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "Event Admin",
        yes: "Yes",
        no: "No",
        none: "-",
        language: "Language",
    },

    nav: NavTexts {
        home: "Home",
        logs: "Logs",
        events: "Events",
        locations: "Locations",
        contacts: "Contacts",
        event: "Event",
        location: "Location",
        contact: "Contact",
    },

    home: HomeTexts {
        title: "Event management",
        subtitle: "Pick a section to manage",
        events_hint: "Schedule events, reminders and repetitions",
        locations_hint: "Venues with address and coordinates",
        contacts_hint: "People to invite, with their photo",
    },

    fields: FieldTexts {
        title: "Title",
        guests: "Guests",
        date_time: "Date and time",
        timezone: "Time zone",
        description: "Description",
        repetition: "Repetition",
        reminder: "Reminder",
        classification: "Classification",
        place: "Place",
        address: "Address",
        coordinates: "Coordinates",
        greeting: "Greeting",
        full_name: "Full name",
        id_number: "ID number",
        email: "Email",
        phone: "Phone number",
        photo: "Photo",
        choices: ChoiceTexts {
            not_selected: "(select)",
            repeat_none: "None",
            repeat_daily: "Daily",
            repeat_weekly: "Weekly",
            mr: "Mr.",
            mrs: "Mrs.",
            dr: "Dr.",
        },
    },

    form: FormTexts {
        new_title: " New {resource} ",
        edit_title: " Edit {resource} #{id} ",
        required_marker: "*",
        missing_required: "Required: {fields}",
        invalid_date_time: "{field}: cannot read \"{value}\" as a date and time",
        date_time_hint: "YYYY-MM-DD HH:MM",
        file_hint: "path to a local file",
        current_file: "Current file",
        selected_file: "Selected: {file}",
    },

    table: TableTexts {
        empty: "No {resources} yet",
        empty_hint: "Press n to create one",
        loading: "Loading {resources}...",
        load_failed: "Could not load {resources}",
        reload_hint: "Press r to try again",
        id_column: "ID",
        attached: "attached",
    },

    notify: NotifyTexts {
        created: "{resource} created",
        updated: "{resource} #{id} updated",
        deleted: "{resource} #{id} deleted",
        save_failed: "Could not save {resource}: {error}",
        delete_failed: "Could not delete {resource} #{id}: {error}",
        not_found: "{resource} #{id} is not in the list",
        invalid_form: "Please complete the required fields",
        language_changed: "Language: {language}",
    },

    confirm: ConfirmTexts {
        title: " Confirm Delete ",
        message: "Delete {resource} #{id}? This cannot be undone.",
        yes: "[Y]es ",
        no: "[N]o ",
        cancel: " Cancel",
    },

    help: HelpTexts {
        title: " Help (press ? or Esc to close) ",
        global_section: "--- Global ---",
        move_up: "Move selection up",
        move_down: "Move selection down",
        open_selected: "Open selected section",
        new_record: "Start a new record",
        edit_record: "Edit selected record",
        delete_record: "Delete selected record",
        reload: "Reload list",
        focus_form: "Focus the form",
        next_field: "Next field",
        prev_field: "Previous field",
        cycle_choice: "Change option",
        toggle_flag: "Toggle yes/no field",
        submit: "Save",
        clear_field: "Clear field",
        delete_char: "Delete last character",
        leave_form: "Leave the form (keeps input)",
        scroll_up: "Scroll up (older logs)",
        scroll_down: "Scroll down (newer logs)",
        page_up: "Scroll up one page",
        page_down: "Scroll down one page",
        top: "Navigate to top",
        bottom: "Navigate to bottom",
        back: "Navigate back",
        go_home: "Go home",
        go_logs: "Go to logs",
        open_pages: "Events / Locations / Contacts",
        switch_language: "Switch language",
        toggle_help: "Toggle this help",
        quit: "Quit application",
        home_bar: "j/k: move | Enter: open | 1/2/3: sections | L: language | ?: help | q: quit",
        page_bar: "n: new | e: edit | d: delete | r: reload | Tab: form | h: back | ?: help",
        form_bar: "Tab/↑↓: field | ←→: option | Space: toggle | Enter: save | Esc: leave",
        logs_bar: "j/k: scroll | G: bottom | gg: top | PgUp/PgDn: page | h: back | ?: help",
    },
};
