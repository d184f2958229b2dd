pub const CONTAINER: &str = "min-h-screen bg-gray-900 w-full px-4 sm:px-6 lg:px-8 py-8";
pub const CARD: &str = "bg-gray-800 p-6 sm:p-8 rounded-2xl shadow-xl max-w-2xl mx-auto border border-gray-700";
pub const CARD_ERROR: &str = "bg-red-900/50 border border-red-800 rounded-lg p-4 text-red-200 text-center";
pub const CARD_SUCCESS: &str = "bg-green-900/50 border border-green-800 rounded-lg p-4 text-green-200 text-center font-bold text-xl";
pub const TEXT_H1: &str = "text-3xl font-bold mb-6 text-center text-white";
pub const TEXT_SMALL: &str = "text-sm text-gray-400";
pub const STAT: &str = "flex flex-col items-center px-4 py-2 rounded-lg bg-gray-700/50";
pub const STAT_VALUE: &str = "text-lg font-bold text-sky-400";
pub const BUTTON_SPIN: &str = "w-full px-8 py-4 rounded-full font-bold text-lg text-white bg-gradient-to-r from-sky-500 to-blue-600 hover:from-sky-600 hover:to-blue-700 shadow-lg transition-all duration-300";
pub const BUTTON_SPIN_DISABLED: &str = "w-full px-8 py-4 rounded-full font-bold text-lg text-white bg-gradient-to-r from-gray-500 to-gray-600 opacity-75 cursor-not-allowed";
