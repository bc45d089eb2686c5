use http::StatusCode;

use super::Entry;
use crate::ErrorKind;

// Ids are persisted and logged by consumers: append new kinds at the end
// and never reuse a retired id.
catalog! {
    UNKNOWN_ERROR = 1 => INTERNAL_SERVER_ERROR {
        en: "internal server error",
        fr: "erreur interne",
    },
    ACTION_ALREADY_UPDATED = 2 => BAD_REQUEST {
        en: "action status already updated",
        fr: "le status de l'action a déjà été mis à jour",
    },
    NO_ACTION = 3 => NOT_FOUND {
        en: "action does not exist",
        fr: "l'action n'existe pas",
    },
    ACTION_LOOP = 4 => BAD_REQUEST {
        en: "action definition contains a recursive loop",
        fr: "la définition de l'action contient une boucle récursive",
    },
    INVALID_ID = 5 => BAD_REQUEST {
        en: "ID must be an integer",
        fr: "l'ID doit être un nombre entier",
    },
    INVALID_PROJECT = 6 => BAD_REQUEST {
        en: "project not provided",
        fr: "projet manquant",
    },
    INVALID_PROJECT_KEY = 7 => BAD_REQUEST {
        en: "project key must contain only upper-case alphanumerical characters",
        fr: "la clef de project doit uniquement contenir des lettres majuscules et des chiffres",
    },
    PROJECT_HAS_PIPELINE = 8 => FORBIDDEN {
        en: "project contains a pipeline",
        fr: "le project contient un pipeline",
    },
    PROJECT_HAS_APPLICATION = 9 => FORBIDDEN {
        en: "project contains an application",
        fr: "le project contient une application",
    },
    UNAUTHORIZED = 10 => UNAUTHORIZED {
        en: "not authenticated",
        fr: "authentification invalide",
    },
    FORBIDDEN = 11 => FORBIDDEN {
        en: "forbidden",
        fr: "accès refusé",
    },
    PIPELINE_NOT_FOUND = 12 => BAD_REQUEST {
        en: "pipeline does not exist",
        fr: "le pipeline n'existe pas",
    },
    PIPELINE_NOT_ATTACHED = 13 => BAD_REQUEST {
        en: "pipeline is not attached to application",
        fr: "le pipeline n'est pas lié à l'application",
    },
    NO_ENVIRONMENT_PROVIDED = 14 => BAD_REQUEST {
        en: "deployment and testing pipelines require an environnement",
        fr: "les pipelines de déploiement et de tests requièrent un environnement",
    },
    ENVIRONMENT_PROVIDED = 15 => BAD_REQUEST {
        en: "build pipeline are not compatible with environment usage",
        fr: "une pipeline de build ne nécessite pas d'environnement",
    },
    UNKNOWN_ENV = 16 => BAD_REQUEST {
        en: "unknown environment",
        fr: "environnement inconnu",
    },
    ENVIRONMENT_EXIST = 17 => FORBIDDEN {
        en: "environment already exists",
        fr: "l'environnement existe",
    },
    NO_PIPELINE_BUILD = 18 => NOT_FOUND {
        en: "this pipeline build does not exist",
        fr: "ce build n'existe pas",
    },
    INVALID_USERNAME = 21 => BAD_REQUEST {
        en: "invalid username",
        fr: "nom d'utilisateur invalide",
    },
    INVALID_EMAIL = 22 => BAD_REQUEST {
        en: "invalid email",
        fr: "addresse email invalide",
    },
    GROUP_PRESENT = 23 => BAD_REQUEST {
        en: "group already present",
        fr: "le groupe est déjà présent",
    },
    INVALID_NAME = 24 => BAD_REQUEST {
        en: "invalid name",
        fr: "le nom est invalide",
    },
    INVALID_USER = 25 => BAD_REQUEST {
        en: "invalid user or password",
        fr: "mauvaise combinaison compte/mot de passe utilisateur",
    },
    BUILD_ARCHIVED = 26 => BAD_REQUEST {
        en: "Cannot restart this build because it has been archived",
        fr: "impossible de relancer ce build car il a été archivé",
    },
    NO_ENVIRONMENT = 27 => NOT_FOUND {
        en: "environment does not exist",
        fr: "l'environement n'existe pas",
    },
    MODEL_NAME_EXIST = 28 => FORBIDDEN {
        en: "worker model name already used",
        fr: "le nom du modèle de worker est déjà utilisé",
    },
    NO_PROJECT = 30 => NOT_FOUND {
        en: "project does not exist",
        fr: "le projet n'existe pas",
    },
    VARIABLE_EXISTS = 31 => FORBIDDEN {
        en: "variable already exists",
        fr: "la variable existe déjà",
    },
    INVALID_GROUP_PATTERN = 32 => BAD_REQUEST {
        en: "group name must respect '^[a-zA-Z0-9.-_-]{1,}$'",
        fr: "nom de groupe invalide '^[a-zA-Z0-9.-_-]{1,}$'",
    },
    GROUP_EXISTS = 33 => FORBIDDEN {
        en: "group already exists",
        fr: "le groupe existe déjà",
    },
    NOT_ENOUGH_ADMIN = 34 => BAD_REQUEST {
        en: "not enough group admin left",
        fr: "pas assez d'admin restant",
    },
    INVALID_PROJECT_NAME = 35 => BAD_REQUEST {
        en: "project name must not be empty",
        fr: "nom de project vide non autorisé",
    },
    INVALID_APPLICATION_PATTERN = 36 => BAD_REQUEST {
        en: "application name must respect '^[a-zA-Z0-9.-_-]{1,}$'",
        fr: "nom de l'application invalide '^[a-zA-Z0-9.-_-]{1,}$'",
    },
    INVALID_PIPELINE_PATTERN = 37 => BAD_REQUEST {
        en: "pipeline name must respect '^[a-zA-Z0-9.-_-]{1,}$'",
        fr: "nom du pipeline invalide '^[a-zA-Z0-9.-_-]{1,}$'",
    },
    NOT_FOUND = 38 => NOT_FOUND {
        en: "resource not found",
        fr: "la ressource n'existe pas",
    },
    NO_HOOK = 40 => NOT_FOUND {
        en: "hook not found",
        fr: "le hook n'existe pas",
    },
    NO_ATTACHED_PIPELINE = 41 => NOT_FOUND {
        en: "pipeline not attached to the application",
        fr: "le pipeline n'est pas lié à l'application",
    },
    NO_REPOS_MANAGER = 42 => NOT_FOUND {
        en: "repositories manager not found",
        fr: "le gestionnaire de dépôt n'existe pas",
    },
    NO_REPOS_MANAGER_AUTH = 43 => UNAUTHORIZED {
        en: "platform authentication error, please contact your administrator",
        fr: "connexion de la plateforme au gestionnaire de dépôt refusée, merci de contacter l'administrateur",
    },
    NO_REPOS_MANAGER_CLIENT_AUTH = 44 => FORBIDDEN {
        en: "Repository manager authentication error, please unlink and relink your project to the repository manager",
        fr: "connexion au gestionnaire de dépôts refusée, merci de détacher et ré-attacher le repository manager sur votre projet",
    },
    REPO_NOT_FOUND = 45 => NOT_FOUND {
        en: "repository not found",
        fr: "le dépôt n'existe pas",
    },
    SECRET_STORE_UNREACHABLE = 46 => METHOD_NOT_ALLOWED {
        en: "could not reach secret backend to fetch secret key",
        fr: "impossible de contacter vault",
    },
    SECRET_KEY_FETCH_FAILED = 47 => METHOD_NOT_ALLOWED {
        en: "error while fetching key from secret backend",
        fr: "erreur pendnat la récupération de la clef de chiffrement",
    },
    INVALID_GO_PATH = 48 => BAD_REQUEST {
        en: "invalid gopath",
        fr: "le gopath n'est pas valide",
    },
    COMMITS_FETCH_FAILED = 49 => NOT_FOUND {
        en: "unable to retrieves commits",
        fr: "impossible de retrouver les changements",
    },
    INVALID_SECRET_FORMAT = 50 => INTERNAL_SERVER_ERROR {
        en: "cannot decrypt secret, invalid format",
        fr: "impossibe de dechiffrer le secret, format invalide",
    },
    NO_PREVIOUS_SUCCESS = 52 => NOT_FOUND {
        en: "there is no previous success version for this pipeline",
        fr: "il n'y a aucune précédente version en succès pour ce pipeline",
    },
    NO_PERM_EXECUTION = 53 => FORBIDDEN {
        en: "you don't have execution right",
        fr: "vous n'avez pas les droits d'exécution",
    },
    SESSION_NOT_FOUND = 54 => UNAUTHORIZED {
        en: "invalid session",
        fr: "session invalide",
    },
    INVALID_SECRET_VALUE = 55 => BAD_REQUEST {
        en: "secret value not specified",
        fr: "valeur du secret non spécifiée",
    },
    PIPELINE_HAS_APPLICATION = 56 => BAD_REQUEST {
        en: "pipeline still used by an application",
        fr: "le pipeline est utilisé par une application",
    },
    NO_DIRECT_SECRET_USE = 57 => FORBIDDEN {
        en: "usage of 'password' parameter is not allowed",
        fr: "l'utilisation du type de paramètre 'password' est impossible",
    },
    NO_BRANCH = 58 => NOT_FOUND {
        en: "branch not found in repository",
        fr: "la branche est introuvable dans le dépôt",
    },
    LDAP_CONN = 59 => INTERNAL_SERVER_ERROR {
        en: "LDAP server connection error",
        fr: "erreur de connexion au serveur LDAP",
    },
    SERVICE_UNAVAILABLE = 60 => SERVICE_UNAVAILABLE {
        en: "service currently unavailable or down for maintenance",
        fr: "service temporairement indisponible ou en maintenance",
    },
    PARSE_USER_NOTIFICATION = 61 => BAD_REQUEST {
        en: "unrecognized user notification settings",
        fr: "notification non reconnue",
    },
    NOT_SUPPORTED_USER_NOTIFICATION = 62 => BAD_REQUEST {
        en: "unsupported user notification",
        fr: "notification non supportée",
    },
    GROUP_NEED_ADMIN = 63 => BAD_REQUEST {
        en: "need at least 1 administrator",
        fr: "il faut au moins 1 administrateur",
    },
    GROUP_NEED_WRITE = 64 => BAD_REQUEST {
        en: "need at least 1 group with write permission",
        fr: "il faut au moins 1 groupe avec les droits d'écriture",
    },
    NO_VARIABLE = 65 => NOT_FOUND {
        en: "variable not found",
        fr: "la variable n'existe pas",
    },
    PLUGIN_INVALID = 66 => BAD_REQUEST {
        en: "invalid plugin",
        fr: "plugin non valide",
    },
    APPLICATION_EXIST = 69 => FORBIDDEN {
        en: "application already exists",
        fr: "une application du même nom existe déjà",
    },
    BRANCH_NAME_NOT_PROVIDED = 70 => BAD_REQUEST {
        en: "git.branch or git.tag parameter must be provided",
        fr: "le paramètre git.branch ou git.tag est obligatoire",
    },
    INFINITE_TRIGGER_LOOP = 71 => BAD_REQUEST {
        en: "infinite trigger loop are forbidden",
        fr: "création d'une boucle de trigger infinie interdite",
    },
    INVALID_RESET_USER = 72 => BAD_REQUEST {
        en: "invalid user or email",
        fr: "mauvaise combinaison compte/mail utilisateur",
    },
    USER_CONFLICT = 73 => BAD_REQUEST {
        en: "this user already exists",
        fr: "cet utilisateur existe deja",
    },
    WRONG_REQUEST = 74 => BAD_REQUEST {
        en: "wrong request",
        fr: "la requête est incorrecte",
    },
    ALREADY_EXIST = 75 => FORBIDDEN {
        en: "already exists",
        fr: "conflit",
    },
    INVALID_TYPE = 76 => BAD_REQUEST {
        en: "invalid type",
        fr: "type non valide",
    },
    PARENT_APPLICATION_AND_PIPELINE_MANDATORY = 77 => BAD_REQUEST {
        en: "parent application and pipeline are mandatory",
        fr: "application et pipeline parents obligatoires",
    },
    NO_PARENT_BUILD_FOUND = 78 => NOT_FOUND {
        en: "no parent build found",
        fr: "aucun build parent n'a pu être trouvé",
    },
    PARAMETER_EXISTS = 79 => FORBIDDEN {
        en: "parameter already exists",
        fr: "le paramètre existe déjà",
    },
    NO_HATCHERY = 80 => NOT_FOUND {
        en: "No hatchery found",
        fr: "La hatchery n'existe pas",
    },
    INVALID_WORKER_STATUS = 81 => NOT_FOUND {
        en: "Worker status is invalid",
        fr: "Le status du worker est incorrect",
    },
    INVALID_TOKEN = 82 => UNAUTHORIZED {
        en: "Invalid token",
        fr: "Token non valide",
    },
    APP_BUILDING_PIPELINES = 83 => FORBIDDEN {
        en: "Cannot delete application, there are building pipelines",
        fr: "Impossible de supprimer l'application, il y a pipelines en cours",
    },
    INVALID_TIMEZONE = 84 => BAD_REQUEST {
        en: "Invalid timezone",
        fr: "Fuseau horaire invalide",
    },
    ENVIRONMENT_CANNOT_BE_DELETED = 85 => FORBIDDEN {
        en: "Environment cannot be deleted. It is still in used",
        fr: "L'environement ne peut etre supprimé. Il est encore utilisé.",
    },
    INVALID_PIPELINE = 86 => BAD_REQUEST {
        en: "Invalid pipeline",
        fr: "Pipeline invalide",
    },
    KEY_NOT_FOUND = 87 => NOT_FOUND {
        en: "Key not found",
        fr: "Clé introuvable",
    },
    PIPELINE_ALREADY_EXISTS = 88 => FORBIDDEN {
        en: "Pipeline already exists",
        fr: "Le pipeline existe déjà",
    },
    JOB_ALREADY_BOOKED = 89 => FORBIDDEN {
        en: "Job already booked",
        fr: "Le job est déjà réservé",
    },
    PIPELINE_BUILD_NOT_FOUND = 90 => NOT_FOUND {
        en: "Pipeline build not found",
        fr: "Le pipeline build n'a pu être trouvé",
    },
    ALREADY_TAKEN = 91 => GONE {
        en: "This job is already taken by another worker",
        fr: "Ce job est déjà en cours de traitement par un autre worker",
    },
    WORKFLOW_NODE_NOT_FOUND = 93 => NOT_FOUND {
        en: "Workflow node not found",
        fr: "Noeud de Workflow introuvable",
    },
    WORKFLOW_INVALID_ROOT = 94 => BAD_REQUEST {
        en: "Invalid workflow root",
        fr: "Racine de Workflow invalide",
    },
    WORKFLOW_NODE_REF = 95 => BAD_REQUEST {
        en: "Invalid workflow node reference",
        fr: "Référence de noeud de workflow invalide",
    },
    WORKFLOW_INVALID = 96 => BAD_REQUEST {
        en: "Invalid workflow",
        fr: "Workflow invalide",
    },
    WORKFLOW_NODE_JOIN_NOT_FOUND = 97 => NOT_FOUND {
        en: "Workflow node join not found",
        fr: "Jointure introuvable",
    },
    INVALID_JOB_REQUIREMENT = 98 => BAD_REQUEST {
        en: "Invalid job requirement",
        fr: "Pré-requis de Job invalide",
    },
    NOT_IMPLEMENTED = 99 => NOT_IMPLEMENTED {
        en: "This functionality isn't implemented",
        fr: "La fonctionnalité n'est pas implémentée",
    },
    PARAMETER_NOT_EXISTS = 100 => NOT_FOUND {
        en: "This parameter doesn't exist",
        fr: "Ce paramètre n'existe pas",
    },
    UNKNOWN_KEY_TYPE = 101 => BAD_REQUEST {
        en: "Unknown key type",
        fr: "Le type de clé n'est pas connu",
    },
    INVALID_KEY_PATTERN = 102 => BAD_REQUEST {
        en: "key name must respect the following pattern: '^[a-zA-Z0-9.-_-]{1,}$'",
        fr: "le nom de la clé doit respecter le pattern suivant; '^[a-zA-Z0-9.-_-]{1,}$'",
    },
    WEBHOOK_CONFIG_DOES_NOT_MATCH = 103 => BAD_REQUEST {
        en: "Webhook config does not match",
        fr: "la configuration du webhook ne correspond pas",
    },
    PIPELINE_USED_BY_WORKFLOW = 104 => BAD_REQUEST {
        en: "Pipeline still used by a workflow",
        fr: "Le pipeline est utilisé par un workflow",
    },
    METHOD_NOT_ALLOWED = 105 => METHOD_NOT_ALLOWED {
        en: "Method not allowed",
        fr: "La méthode n'est pas autorisée",
    },
    INVALID_NODE_NAME_PATTERN = 106 => BAD_REQUEST {
        en: "Node name must respect the following pattern: '^[a-zA-Z0-9.-_-]{1,}$'",
        fr: "Le nom du noeud du workflow doit respecter le pattern suivant; '^[a-zA-Z0-9.-_-]{1,}$'",
    },
    WORKFLOW_NODE_PARENT_NOT_RUN = 107 => FORBIDDEN {
        en: "Cannot run a node if their parents have never been launched",
        fr: "Il est interdit de lancer un noeuds si ses parents n'ont jamais été lancés",
    },
    HOOK_NOT_FOUND = 108 => NOT_FOUND {
        en: "hook does not exist",
        fr: "le hook n'existe pas",
    },
    DEFAULT_GROUP_PERMISSION = 109 => BAD_REQUEST {
        en: "Only read permission is allowed to default group",
        fr: "Le groupe par défaut ne peut être utilisé qu'en lecture seule",
    },
    LAST_GROUP_WITH_WRITE_ROLE = 110 => FORBIDDEN {
        en: "The last group must have the write permission",
        fr: "Le dernier groupe doit avoir les droits d'écriture",
    },
    INVALID_EMAIL_DOMAIN = 111 => FORBIDDEN {
        en: "Invalid domain",
        fr: "Domaine invalide",
    },
    WORKFLOW_NODE_RUN_JOB_NOT_FOUND = 112 => NOT_FOUND {
        en: "Job not found",
        fr: "Job non trouvé",
    },
    BUILTIN_KEY_NOT_FOUND = 113 => INTERNAL_SERVER_ERROR {
        en: "Encryption Key not found",
        fr: "Clé de chiffrage introuvable",
    },
    STEP_NOT_FOUND = 114 => NOT_FOUND {
        en: "Step not found",
        fr: "Step introuvable",
    },
    WORKER_MODEL_ALREADY_BOOKED = 115 => FORBIDDEN {
        en: "Worker Model already booked",
        fr: "Le modèle de worker est déjà réservé",
    },
    CONDITIONS_NOT_OK = 116 => BAD_REQUEST {
        en: "Cannot run this pipeline because launch conditions aren't ok",
        fr: "Impossible de démarrer ce pipeline car les conditions de lancement ne sont pas respectées",
    },
    DOWNLOAD_INVALID_OS = 117 => NOT_FOUND {
        en: "OS Invalid. Should be linux, darwin, freebsd or windows",
        fr: "OS invalide. L'OS doit être linux, darwin, freebsd ou windows",
    },
    DOWNLOAD_INVALID_ARCH = 118 => NOT_FOUND {
        en: "Architecture invalid. Should be 386, i386, i686, amd64, x86_64 or arm (depends on OS)",
        fr: "Architecture invalide. L'architecture doit être 386, i386, i686, amd64, x86_64 ou arm (dépendant de l'OS)",
    },
    DOWNLOAD_INVALID_NAME = 119 => NOT_FOUND {
        en: "Invalid name",
        fr: "Nom invalide",
    },
    DOWNLOAD_DOES_NOT_EXIST = 120 => NOT_FOUND {
        en: "File does not exist",
        fr: "Le fichier n'existe pas",
    },
    TOKEN_NOT_FOUND = 121 => NOT_FOUND {
        en: "Token does not exist",
        fr: "Le token n'existe pas",
    },
    WORKFLOW_NOTIFICATION_NODE_REF = 122 => BAD_REQUEST {
        en: "An invalid workflow node reference has been found, if you want to delete a pipeline from your workflow check if this pipeline isn't referenced in your notifications list",
        fr: "Une référence de noeud de workflow est invalide dans vos notifications (si vous souhaitez supprimer un pipeline vérifiez qu'il ne soit plus référencé dans la liste de vos notifications)",
    },
    INVALID_JOB_REQUIREMENT_DUPLICATE_MODEL = 123 => BAD_REQUEST {
        en: "Invalid job requirements: you can't select multiple worker models",
        fr: "Pré-requis de job invalides: vous ne pouvez pas sélectionner plusieurs modèles de worker",
    },
    INVALID_JOB_REQUIREMENT_DUPLICATE_HOSTNAME = 124 => BAD_REQUEST {
        en: "Invalid job requirements: you can't select multiple hostname",
        fr: "Pré-requis de job invalides: vous ne pouvez pas sélectionner plusieurs hostname",
    },
    INVALID_KEY_NAME = 125 => BAD_REQUEST {
        en: "Invalid key name. Application key must have prefix 'app-'; environment key must have prefix 'env-'",
        fr: "Nom de clé invalide. Les clés d'application doivent être préfixées par 'app-', les clés d'environnement doivent être préfixées par 'env-'",
    },
    REPO_OPERATION_TIMEOUT = 126 => REQUEST_TIMEOUT {
        en: "Analyzing repository took too much time",
        fr: "L'analyse du dépôt a pris trop de temps",
    },
    INVALID_GIT_BRANCH = 127 => BAD_REQUEST {
        en: "Invalid git.branch value, you cannot have an empty git.branch value in your default payload",
        fr: "Valeur git.branch invalide, vous ne pouvez pas avoir de valeur git.branch avec une string vide dans votre payload par défaut",
    },
    INVALID_FAVORITE_TYPE = 128 => BAD_REQUEST {
        en: "Invalid favorite type: must be 'project' or 'workflow'",
        fr: "Type de favori invalide: doit être 'projet' ou 'workflow'",
    },
    UNSUPPORTED_OS_ARCH_PLUGIN = 129 => NOT_FOUND {
        en: "Unsupported os/architecture for this plugin",
        fr: "OS/Architecture non supporté pour ce plugin",
    },
    NO_BROADCAST = 130 => NOT_FOUND {
        en: "Invalid broadcast",
        fr: "Information invalide",
    },
    BROADCAST_NOT_FOUND = 131 => NOT_FOUND {
        en: "Broadcast not found",
        fr: "Information non trouvée",
    },
    INVALID_PATTERN_MODEL = 132 => BAD_REQUEST {
        en: "Invalid worker model pattern: name, type and main command are mandatory",
        fr: "Pattern de modèle de worker invalide: le nom, type et commande principale sont requis",
    },
    WORKER_MODEL_NO_ADMIN = 133 => FORBIDDEN {
        en: "Forbidden: you are neither a platform administrator or the administrator for the group in which you want to create the worker model",
        fr: "Accès refusé: vous n'êtes ni un administrateur de la plateforme ni un administrateur du groupe pour lequel vous tentez de créer votre modèle",
    },
    WORKER_MODEL_NO_PATTERN = 134 => FORBIDDEN {
        en: "Forbidden: you must select a pattern of configuration scripts. If you have specific needs, please contact a platform administrator",
        fr: "Accès refusé: vous devez obligatoirement sélectionner un pattern de script de configuration. Si vous souhaitez ajouter un pattern particulier, veuillez contacter un administrateur de la plateforme",
    },
    JOB_NOT_BOOKED = 135 => BAD_REQUEST {
        en: "Job already released",
        fr: "Le job est déjà libéré",
    },
    USER_NOT_FOUND = 136 => NOT_FOUND {
        en: "User not found",
        fr: "Utilisateur non trouvé",
    },
    INVALID_NUMBER = 137 => BAD_REQUEST {
        en: "Invalid number",
        fr: "Nombre non valide",
    },
    KEY_ALREADY_EXIST = 138 => FORBIDDEN {
        en: "Key already exists",
        fr: "La clé existe déjà",
    },
    PIPELINE_NAME_IMPORT = 139 => BAD_REQUEST {
        en: "Pipeline name doesn't correspond in your code",
        fr: "Le nom du pipeline dans le code ne correspond pas au nom du pipeline que vous voulez éditer",
    },
    WORKFLOW_NAME_IMPORT = 140 => BAD_REQUEST {
        en: "Workflow name doesn't correspond in your code",
        fr: "Le nom du workflow dans le code ne correspond pas au nom du workflow que vous voulez éditer",
    },
    ICON_BAD_FORMAT = 141 => BAD_REQUEST {
        en: "Bad icon format. Must be an image",
        fr: "Mauvais format d'icône, doit être une image",
    },
    ICON_BAD_SIZE = 142 => BAD_REQUEST {
        en: "Bad icon size. Must be lower than 100Ko",
        fr: "Taille de l'icône trop importante. (max 100Ko)",
    },
    WORKFLOW_CONDITION_BAD_OPERATOR = 143 => BAD_REQUEST {
        en: "Your run conditions have bad operator",
        fr: "Opérateur de condition de lancement incorrect",
    },
    COLOR_BAD_FORMAT = 144 => BAD_REQUEST {
        en: "The format of color isn't correct. You must use hexadecimal format (example: #FFFF)",
        fr: "Format de la couleur incorrect. Vous devez utiliser le format hexadécimal (exemple: #FFFF)",
    },
    INVALID_HOOK_CONFIGURATION = 145 => BAD_REQUEST {
        en: "Invalid hook configuration",
        fr: "Configuration de hook invalide",
    },
    WORKER_MODEL_DEPLOYMENT_FAILED = 146 => BAD_REQUEST {
        en: "worker model deployment failed",
        fr: "le déploiement du modèle de worker a échoué",
    },
    JOB_LOCKED = 147 => CONFLICT {
        en: "job is locked by another process",
        fr: "le job est verrouillé par un autre processus",
    },
    WORKFLOW_NODE_RUN_LOCKED = 148 => CONFLICT {
        en: "workflow node run is locked by another process",
        fr: "l'exécution du noeud de workflow est verrouillée par un autre processus",
    },
    INVALID_DATA = 149 => BAD_REQUEST {
        en: "Cannot validate given data",
        fr: "Impossible de valider les données",
    },
    INVALID_GROUP_ADMIN = 150 => FORBIDDEN {
        en: "User is not a group's admin",
        fr: "L'utilisateur n'est pas administrateur du groupe",
    },
    INVALID_GROUP_MEMBER = 151 => FORBIDDEN {
        en: "User is not a group's member",
        fr: "L'utilisateur n'est pas membre du groupe",
    },
    WORKFLOW_NOT_GENERATED = 152 => FORBIDDEN {
        en: "Workflow was not generated by a template",
        fr: "Le workflow n'a pas été généré par un template",
    },
    ALREADY_LATEST_TEMPLATE = 153 => FORBIDDEN {
        en: "workflow is already up to date with the latest template version",
        fr: "le workflow est déjà à jour avec la dernière version du modèle",
    },
    INVALID_NODE_DEFAULT_PAYLOAD = 154 => BAD_REQUEST {
        en: "Workflow node which isn't a root node cannot have a default payload",
        fr: "Le workflow est incorrect. Un payload par défaut ne peut pas être sur un pipeline autre que le premier du workflow",
    },
    INVALID_APPLICATION_REPO_STRATEGY = 155 => BAD_REQUEST {
        en: "The repository strategy for your application is not correct",
        fr: "La stratégie de dépôt (vcs) de l'application n'est pas correcte",
    },
    WORKFLOW_NODE_ROOT_UPDATE = 156 => BAD_REQUEST {
        en: "Unable to update/delete the root node of your workflow",
        fr: "Impossible de mettre à jour ou supprimer le noeud racine du workflow",
    },
    WORKFLOW_ALREADY_AS_CODE = 157 => BAD_REQUEST {
        en: "Workflow is already as-code or there is already a pull-request to transform it",
        fr: "Le workflow est déjà as-code ou il y a déjà une pull-request pour le transformer",
    },
    NO_DB_MIGRATION_ID = 158 => NOT_FOUND {
        en: "ID does not exist in the migrations table",
        fr: "Cet id n'existe pas dans la table des migrations",
    },
    CANNOT_PARSE_TEMPLATE = 159 => BAD_REQUEST {
        en: "Cannot parse workflow template",
        fr: "Impossible de parser le modèle de workflow",
    },
    GROUP_NOT_FOUND_IN_PROJECT = 160 => BAD_REQUEST {
        en: "Cannot add this permission group on your workflow because this group is not already in the project's permissions",
        fr: "Impossible d'ajouter ce groupe dans vos permissions de workflow car ce groupe n'est pas présent dans les permissions de votre projet",
    },
    GROUP_NOT_FOUND_IN_WORKFLOW = 161 => BAD_REQUEST {
        en: "Cannot add this permission group on your workflow node because this group is not already your workflow's permissions",
        fr: "Impossible d'ajouter ce groupe dans vos permissions de noeud du workflow car ce groupe n'est pas présent dans les permissions de votre workflow",
    },
    WORKFLOW_PERM_INSUFFICIENT = 162 => BAD_REQUEST {
        en: "Cannot add this permission group on your workflow because you can't have less rights than rights in your project when you are in RWX",
        fr: "Impossible d'ajouter ce groupe dans vos permissions du workflow car ce groupe a des droits inférieurs (< RWX) à celui du workflow",
    },
    APPLICATION_USED_BY_WORKFLOW = 163 => BAD_REQUEST {
        en: "Application still used by a workflow",
        fr: "L'application est utilisée par un workflow",
    },
    LOCKED = 164 => CONFLICT {
        en: "Resource locked",
        fr: "La ressource est verrouillée",
    },
    INVALID_JOB_REQUIREMENT_WORKER_MODEL_PERMISSION = 165 => BAD_REQUEST {
        en: "Invalid job requirements: unable to use worker model due to permissions",
        fr: "Pré-requis de job invalide: Modèle de worker inutilisable en raison des permissions",
    },
    INVALID_JOB_REQUIREMENT_WORKER_MODEL_CAPABILITITES = 166 => BAD_REQUEST {
        en: "Invalid job requirements: the worker model doesn't match with the binary requirements",
        fr: "Pré-requis de job invalide: Le modèle de worker ne dispose pas de binaires suffisants",
    },
    MALFORMATTED_STEP = 167 => BAD_REQUEST {
        en: "Malformatted step",
        fr: "étape malformée",
    },
    VCS_USED_BY_APPLICATION = 168 => BAD_REQUEST {
        en: "Repository manager still used by an application",
        fr: "Le gestionnaire de dépôt est encore utilisé par une application",
    },
    APPLICATION_AS_CODE_OVERRIDE = 169 => FORBIDDEN {
        en: "You cannot override application from this repository",
        fr: "Vous ne pouvez pas importer l'application depuis ce dépôt",
    },
    PIPELINE_AS_CODE_OVERRIDE = 170 => FORBIDDEN {
        en: "You cannot override pipeline from this repository",
        fr: "Vous ne pouvez pas importer le pipeline depuis ce dépôt",
    },
    ENVIRONMENT_AS_CODE_OVERRIDE = 171 => FORBIDDEN {
        en: "You cannot override environment from this repository",
        fr: "Vous ne pouvez pas importer l'environment depuis ce dépôt",
    },
    WORKFLOW_AS_CODE_OVERRIDE = 172 => FORBIDDEN {
        en: "You cannot override workflow from this repository",
        fr: "Vous ne pouvez pas importer le workflow depuis ce dépôt",
    },
    PROJECT_SECRET_DATA_UNKNOWN = 173 => BAD_REQUEST {
        en: "Invalid encrypted data",
        fr: "Donnée chiffrée non valide",
    },
    APPLICATION_MANDATORY_ON_WORKFLOW_AS_CODE = 174 => BAD_REQUEST {
        en: "An application linked to a git repository is mandatory on the workflow root",
        fr: "Une application liée à un dépôt git est obligatoire à la racine du workflow",
    },
    INVALID_PASSWORD = 175 => BAD_REQUEST {
        en: "Your value of type password isn't correct",
        fr: "Votre valeur de type mot de passe n'est pas correct",
    },
    INVALID_PAYLOAD_VARIABLE = 176 => BAD_REQUEST {
        en: "Your payload cannot contain keys like cds.*",
        fr: "Le payload du workflow ne peut pas contenir de clés nommées cds.*",
    },
    REPOSITORY_USED_BY_HOOK = 177 => FORBIDDEN {
        en: "There is still a repository webhook on this repository",
        fr: "Il y a encore un repository webhook sur ce dépôt",
    },
    RESOURCE_NOT_IN_PROJECT = 178 => FORBIDDEN {
        en: "The resource is not attached to the project",
        fr: "La ressource n'est pas lié au projet",
    },
    ENVIRONMENT_NOT_FOUND = 179 => BAD_REQUEST {
        en: "Environment not found ",
        fr: "L'environnement n'existe pas",
    },
    INTEGRATIONT_NOT_FOUND = 180 => BAD_REQUEST {
        en: "Integration not found",
        fr: "L'intégration n'existe pas",
    },
    BAD_BROKER_CONFIGURATION = 181 => BAD_REQUEST {
        en: "Cannot connect to the broker of your event integration. Check your configuration",
        fr: "Impossible de se connecter à votre intégration de type événement. Veuillez vérifier votre configuration",
    },
    SIGNUP_DISABLED = 182 => FORBIDDEN {
        en: "Sign up is disabled for target consumer type",
        fr: "La création de compte est désactivée pour ce mode d'authentification.",
    },
    USERNAME_PRESENT = 183 => BAD_REQUEST {
        en: "username already present",
        fr: "le nom d'utilisateur est déjà présent",
    },
    INVALID_JOB_REQUIREMENT_NETWORK_ACCESS = 184 => BAD_REQUEST {
        en: "Invalid job requirement: network requirement must contains ':'. Example: golang.org:http, golang.org:443",
        fr: "Pré-requis de job invalide: Le pré-requis network doit contenir un ':'. Exemple: golang.org:http, golang.org:443",
    },
    INVALID_WORKER_MODEL_NAME_PATTERN = 185 => BAD_REQUEST {
        en: "worker model name must respect '^[a-zA-Z0-9.-_-]{1,}$'",
        fr: "nom du worker model invalide '^[a-zA-Z0-9.-_-]{1,}$'",
    },
    WORKFLOW_AS_CODE_RESYNC = 186 => FORBIDDEN {
        en: "You cannot resynchronize an as-code workflow",
        fr: "Impossible de resynchroniser un workflow en mode as-code",
    },
    WORKFLOW_NODE_NAME_DUPLICATE = 187 => BAD_REQUEST {
        en: "You cannot have same name for different pipelines in your workflow",
        fr: "Vous ne pouvez pas avoir plusieurs fois le même nom de pipeline dans votre workflow",
    },
    UNSUPPORTED_MEDIA_TYPE = 188 => UNSUPPORTED_MEDIA_TYPE {
        en: "Request format invalid",
        fr: "Le format de la requête est invalide",
    },
    NOTHING_TO_PUSH = 189 => BAD_REQUEST {
        en: "No diff to push",
        fr: "Aucune modification à pousser",
    },
    WORKER_ERROR_COMMAND = 190 => BAD_REQUEST {
        en: "Worker command in error",
        fr: "Commande du worker en erreur",
    },
}
