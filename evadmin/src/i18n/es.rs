use super::keys::{
    ChoiceTexts, CommonTexts, ConfirmTexts, FieldTexts, FormTexts, HelpTexts, HomeTexts,
    NavTexts, NotifyTexts, TableTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "Administración de eventos",
        yes: "Sí",
        no: "No",
        none: "-",
        language: "Idioma",
    },

    nav: NavTexts {
        home: "Inicio",
        logs: "Registros",
        events: "Eventos",
        locations: "Ubicaciones",
        contacts: "Contactos",
        event: "Evento",
        location: "Ubicación",
        contact: "Contacto",
    },

    home: HomeTexts {
        title: "Gestión de eventos",
        subtitle: "Elige una sección para administrar",
        events_hint: "Programa eventos, recordatorios y repeticiones",
        locations_hint: "Lugares con dirección y coordenadas",
        contacts_hint: "Personas a invitar, con su fotografía",
    },

    fields: FieldTexts {
        title: "Título",
        guests: "Invitados",
        date_time: "Fecha y hora",
        timezone: "Zona horaria",
        description: "Descripción",
        repetition: "Repetición",
        reminder: "Recordatorio",
        classification: "Clasificación",
        place: "Lugar",
        address: "Dirección",
        coordinates: "Coordenadas",
        greeting: "Saludo",
        full_name: "Nombre completo",
        id_number: "Número de identificación",
        email: "Correo electrónico",
        phone: "Número de teléfono",
        photo: "Fotografía",
        choices: ChoiceTexts {
            not_selected: "(seleccione)",
            repeat_none: "Ninguna",
            repeat_daily: "Diaria",
            repeat_weekly: "Semanal",
            mr: "Sr.",
            mrs: "Sra.",
            dr: "Dr.",
        },
    },

    form: FormTexts {
        new_title: " Nuevo registro: {resource} ",
        edit_title: " Editar {resource} #{id} ",
        required_marker: "*",
        missing_required: "Obligatorio: {fields}",
        invalid_date_time: "{field}: \"{value}\" no es una fecha y hora válida",
        date_time_hint: "AAAA-MM-DD HH:MM",
        file_hint: "ruta a un archivo local",
        current_file: "Archivo actual",
        selected_file: "Seleccionado: {file}",
    },

    table: TableTexts {
        empty: "Todavía no hay {resources}",
        empty_hint: "Pulsa n para crear uno",
        loading: "Cargando {resources}...",
        load_failed: "No se pudieron cargar {resources}",
        reload_hint: "Pulsa r para reintentar",
        id_column: "ID",
        attached: "adjunto",
    },

    notify: NotifyTexts {
        created: "{resource} creado",
        updated: "{resource} #{id} actualizado",
        deleted: "{resource} #{id} eliminado",
        save_failed: "No se pudo guardar {resource}: {error}",
        delete_failed: "No se pudo eliminar {resource} #{id}: {error}",
        not_found: "{resource} #{id} no está en la lista",
        invalid_form: "Completa los campos obligatorios",
        language_changed: "Idioma: {language}",
    },

    confirm: ConfirmTexts {
        title: " Confirmar eliminación ",
        message: "¿Eliminar {resource} #{id}? No se puede deshacer.",
        yes: "[Y] Sí ",
        no: "[N] No ",
        cancel: " Cancelar",
    },

    help: HelpTexts {
        title: " Ayuda (pulsa ? o Esc para cerrar) ",
        global_section: "--- Global ---",
        move_up: "Subir selección",
        move_down: "Bajar selección",
        open_selected: "Abrir la sección seleccionada",
        new_record: "Nuevo registro",
        edit_record: "Editar el registro seleccionado",
        delete_record: "Eliminar el registro seleccionado",
        reload: "Recargar la lista",
        focus_form: "Ir al formulario",
        next_field: "Campo siguiente",
        prev_field: "Campo anterior",
        cycle_choice: "Cambiar opción",
        toggle_flag: "Alternar sí/no",
        submit: "Guardar",
        clear_field: "Vaciar campo",
        delete_char: "Borrar último carácter",
        leave_form: "Salir del formulario (conserva lo escrito)",
        scroll_up: "Subir (registros anteriores)",
        scroll_down: "Bajar (registros recientes)",
        page_up: "Subir una página",
        page_down: "Bajar una página",
        top: "Ir al principio",
        bottom: "Ir al final",
        back: "Volver",
        go_home: "Ir al inicio",
        go_logs: "Ir a registros",
        open_pages: "Eventos / Ubicaciones / Contactos",
        switch_language: "Cambiar idioma",
        toggle_help: "Mostrar u ocultar esta ayuda",
        quit: "Salir",
        home_bar: "j/k: mover | Enter: abrir | 1/2/3: secciones | L: idioma | ?: ayuda | q: salir",
        page_bar: "n: nuevo | e: editar | d: eliminar | r: recargar | Tab: formulario | h: volver | ?: ayuda",
        form_bar: "Tab/↑↓: campo | ←→: opción | Espacio: alternar | Enter: guardar | Esc: salir",
        logs_bar: "j/k: desplazar | G: final | gg: inicio | RePág/AvPág: página | h: volver | ?: ayuda",
    },
};
