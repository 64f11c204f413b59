mod game_server;
